use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Contact submissions allowed per client within `CONTACT_WINDOW`.
pub const CONTACT_MAX_SUBMISSIONS: usize = 5;
pub const CONTACT_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Sliding-window throttle for the public contact form, keyed by client
/// address.
pub struct ContactThrottle {
    submissions: Mutex<HashMap<String, Vec<Instant>>>,
    max_submissions: usize,
    window: Duration,
}

impl ContactThrottle {
    pub fn new(max_submissions: usize, window: Duration) -> Self {
        Self {
            submissions: Mutex::new(HashMap::new()),
            max_submissions,
            window,
        }
    }

    /// Records an attempt. `false` once the client is over its budget.
    pub fn allow(&self, client: &str) -> bool {
        let now = Instant::now();
        let mut submissions = self
            .submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let window = self.window;
        let entry = submissions.entry(client.to_string()).or_default();
        entry.retain(|&at| now.duration_since(at) < window);

        if entry.len() >= self.max_submissions {
            return false;
        }
        entry.push(now);

        // Forget every client whose window has fully lapsed.
        submissions.retain(|_, times| {
            times.retain(|&at| now.duration_since(at) < window);
            !times.is_empty()
        });
        true
    }
}

impl Default for ContactThrottle {
    fn default() -> Self {
        Self::new(CONTACT_MAX_SUBMISSIONS, CONTACT_WINDOW)
    }
}

#[cfg(test)]
impl ContactThrottle {
    fn tracked_clients(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::{ContactThrottle, CONTACT_MAX_SUBMISSIONS};

    #[test]
    fn test_allows_five_then_blocks() {
        let throttle = ContactThrottle::default();
        for _ in 0..CONTACT_MAX_SUBMISSIONS {
            assert!(throttle.allow("10.0.0.1"));
        }
        assert!(!throttle.allow("10.0.0.1"));
        // Budgets are per client.
        assert!(throttle.allow("10.0.0.2"));
    }

    #[test]
    fn test_window_expiry_restores_budget() {
        let throttle = ContactThrottle::new(1, Duration::from_millis(5));
        assert!(throttle.allow("a"));
        assert!(!throttle.allow("a"));

        sleep(Duration::from_millis(20));
        assert!(throttle.allow("a"));
    }

    #[test]
    fn test_lapsed_clients_are_forgotten() {
        let throttle = ContactThrottle::new(5, Duration::from_millis(1));
        for i in 0..1000 {
            assert!(throttle.allow(&format!("client-{i}")));
        }
        assert_eq!(throttle.tracked_clients(), 1000);

        sleep(Duration::from_millis(20));
        assert!(throttle.allow("fresh"));
        assert_eq!(throttle.tracked_clients(), 1);
    }
}
