//! 最新値セル
//!
//! バックグラウンドのサンプラー（書き込み側）と電流センサー（読み出し側）の間で
//! ADC生値を1スロットだけ共有します。常に上書きし、読み出しは最後に書かれた値を返します。

use core::sync::atomic::{AtomicU16, Ordering};

/// ADC生値の単一スロット
pub struct SampleCell {
    raw: AtomicU16,
}

impl SampleCell {
    pub const fn new() -> Self {
        Self {
            raw: AtomicU16::new(0),
        }
    }

    /// サンプルを上書き
    #[inline(always)]
    pub fn store(&self, raw: u16) {
        self.raw.store(raw, Ordering::Relaxed);
    }

    /// 最後に書かれたサンプルを取得（鮮度の保証なし）
    #[inline(always)]
    pub fn load(&self) -> u16 {
        self.raw.load(Ordering::Relaxed)
    }
}

impl Default for SampleCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_zero() {
        let cell = SampleCell::new();
        assert_eq!(cell.load(), 0);
    }

    #[test]
    fn test_latest_value_wins() {
        let cell = SampleCell::new();
        cell.store(100);
        cell.store(2048);
        cell.store(4095);
        assert_eq!(cell.load(), 4095);
        // 読み出しで値は消えない
        assert_eq!(cell.load(), 4095);
    }

    #[test]
    fn test_shared_between_threads() {
        static CELL: SampleCell = SampleCell::new();

        let producer = std::thread::spawn(|| {
            for raw in 0..=4095u16 {
                CELL.store(raw);
            }
        });
        producer.join().unwrap();

        assert_eq!(CELL.load(), 4095);
    }
}
