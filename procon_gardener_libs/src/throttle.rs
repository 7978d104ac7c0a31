use tokio::time::{self, Duration, Instant};

/// Keeps consecutive requests at least `interval` apart, measured from the start of the previous one.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 前回のリクエスト開始から`interval`が経過するまで待機するメソッド
    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            time::sleep_until(last + self.interval).await;
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_wait_returns_immediately() {
        let mut throttle = Throttle::new(Duration::from_millis(1500));
        let start = Instant::now();
        throttle.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn space_consecutive_waits() {
        let mut throttle = Throttle::new(Duration::from_millis(1500));
        let start = Instant::now();
        for _ in 0..5 {
            throttle.wait().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(1500 * 4));
    }

    #[tokio::test(start_paused = true)]
    async fn count_elapsed_work_toward_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(1500));
        let start = Instant::now();
        throttle.wait().await;

        time::sleep(Duration::from_millis(1000)).await;
        let before = Instant::now();
        throttle.wait().await;

        let waited = before.elapsed();
        assert!(waited <= Duration::from_millis(500));
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
