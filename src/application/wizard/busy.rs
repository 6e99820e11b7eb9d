//! Busy flag shared by the mutating wizard operations.

use std::sync::atomic::{AtomicBool, Ordering};

use super::WizardError;

/// Flag set while a create, save or submit is in flight.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    /// Returns true while a mutating operation holds the flag.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Takes the flag, or fails with `WizardError::Busy` if already taken.
    pub fn acquire(&self) -> Result<BusyGuard<'_>, WizardError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| BusyGuard(&self.0))
            .map_err(|_| WizardError::Busy)
    }
}

/// Releases the busy flag when dropped, whatever path the operation took.
#[derive(Debug)]
pub struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_held() {
        let flag = BusyFlag::default();
        let guard = flag.acquire().unwrap();
        assert!(flag.is_set());
        assert_eq!(flag.acquire().unwrap_err(), WizardError::Busy);
        drop(guard);
        assert!(!flag.is_set());
    }

    #[test]
    fn flag_is_released_on_early_return() {
        fn failing(flag: &BusyFlag) -> Result<(), WizardError> {
            let _busy = flag.acquire()?;
            Err(WizardError::Incomplete { remaining: 1 })
        }

        let flag = BusyFlag::default();
        assert!(failing(&flag).is_err());
        assert!(!flag.is_set());
        assert!(flag.acquire().is_ok());
    }
}
