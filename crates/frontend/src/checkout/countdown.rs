//! Обратный отсчёт автоперехода к заказу после оформления.
//!
//! Отделён от компонента, чтобы гарантию "не более одного перехода"
//! при гонке таймера с кликом можно было проверить обычными unit-тестами.

/// Результат одного секундного тика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Отсчёт продолжается, осталось указанное число секунд
    Continue(u8),
    /// Отсчёт дошёл до нуля. should_navigate=false, если переход
    /// уже выполнен вручную
    Expired { should_navigate: bool },
}

/// Обратный отсчёт с одноразовым флагом перехода, общим для таймера и клика
#[derive(Debug, Clone)]
pub struct RedirectCountdown {
    seconds_left: u8,
    navigated: bool,
}

impl RedirectCountdown {
    pub fn new(seconds: u8) -> Self {
        Self {
            seconds_left: seconds,
            navigated: false,
        }
    }

    pub fn seconds_left(&self) -> u8 {
        self.seconds_left
    }

    /// Один секундный тик. На нуле отсчёт считается истёкшим и
    /// забирает право на переход, если оно ещё не израсходовано.
    pub fn tick(&mut self) -> CountdownTick {
        if self.seconds_left > 0 {
            self.seconds_left -= 1;
        }
        if self.seconds_left == 0 {
            let should_navigate = !self.navigated;
            self.navigated = true;
            CountdownTick::Expired { should_navigate }
        } else {
            CountdownTick::Continue(self.seconds_left)
        }
    }

    /// Ручной переход по клику. true только в первый раз.
    pub fn take_manual_navigation(&mut self) -> bool {
        if self.navigated {
            false
        } else {
            self.navigated = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_navigation_fires_once() {
        let mut countdown = RedirectCountdown::new(3);
        assert_eq!(countdown.tick(), CountdownTick::Continue(2));
        assert_eq!(countdown.tick(), CountdownTick::Continue(1));
        assert_eq!(
            countdown.tick(),
            CountdownTick::Expired {
                should_navigate: true
            }
        );
        // Повторный тик после истечения права на переход уже не даёт
        assert_eq!(
            countdown.tick(),
            CountdownTick::Expired {
                should_navigate: false
            }
        );
    }

    #[test]
    fn test_manual_click_suppresses_auto_fire() {
        let mut countdown = RedirectCountdown::new(3);
        assert_eq!(countdown.tick(), CountdownTick::Continue(2));
        assert!(countdown.take_manual_navigation());
        assert_eq!(countdown.tick(), CountdownTick::Continue(1));
        assert_eq!(
            countdown.tick(),
            CountdownTick::Expired {
                should_navigate: false
            }
        );
    }

    #[test]
    fn test_manual_click_only_once() {
        let mut countdown = RedirectCountdown::new(3);
        assert!(countdown.take_manual_navigation());
        assert!(!countdown.take_manual_navigation());
    }

    #[test]
    fn test_manual_click_after_expiry() {
        let mut countdown = RedirectCountdown::new(1);
        assert_eq!(
            countdown.tick(),
            CountdownTick::Expired {
                should_navigate: true
            }
        );
        assert!(!countdown.take_manual_navigation());
    }
}
