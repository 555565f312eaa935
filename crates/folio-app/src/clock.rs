use chrono::Local;
use folio_terminal::Clock;

/// Host wall clock for the `date` command.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
    }
}
