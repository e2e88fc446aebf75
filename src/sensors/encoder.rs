//! エンコーダー位置・速度推定
//!
//! フリーランの符号付き16ビットカウンタを読み、2つの位置サンプルと
//! 固定サンプリング周波数 Fe から回転速度を求めます。
//!
//! 呼び出し側は `previous` をちょうど `1/Fe` 秒前に取得しておく必要があります。
//! 推定器自身は時間を計測しません。
//!
//! ## 既知の制限
//! 計測区間内でカウンタがラップ（32767 → -32768）すると差分が不連続になり、
//! 速度は大きく外れた値になります。補正はしていません。

use crate::hal::QuadratureCounter;

/// 1分あたりの秒数
const SECONDS_PER_MINUTE: f32 = 60.0;

/// エンコーダー速度推定器
pub struct SpeedEstimator<E: QuadratureCounter> {
    counter: E,
    sample_rate_hz: f32,
}

impl<E: QuadratureCounter> SpeedEstimator<E> {
    /// # Arguments
    /// * `counter` - エンコーダーモードのカウンタ
    /// * `sample_rate_hz` - 位置サンプリング周波数 Fe [Hz]
    pub fn new(counter: E, sample_rate_hz: f32) -> Self {
        Self {
            counter,
            sample_rate_hz,
        }
    }

    /// エンコーダーのカウントを開始
    ///
    /// モーター起動とは独立したライフサイクル操作です。
    pub fn start(&mut self) {
        info!("Encoder counter started");
        self.counter.start();
    }

    /// 現在位置（生カウンタ値）
    pub fn position(&self) -> i16 {
        self.counter.read_counter()
    }

    /// 速度を計算
    ///
    /// `(現在位置 - previous) * Fe * 60`
    ///
    /// # Arguments
    /// * `previous` - `1/Fe` 秒前に取得した位置
    pub fn speed(&self, previous: i16) -> f32 {
        let delta = self.position() as i32 - previous as i32;
        delta as f32 * self.sample_rate_hz * SECONDS_PER_MINUTE
    }

    pub fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }

    pub fn counter(&self) -> &E {
        &self.counter
    }
}
