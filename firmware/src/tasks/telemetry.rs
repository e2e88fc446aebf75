//! テレメトリタスク
//!
//! Fe周期でエンコーダー位置を取得して速度を計算し、
//! 電流・速度・Duty比を1秒ごとにログ出力します。

use embassy_time::{Duration, Ticker};
use hbridge_drive::{CurrentSensor, MotorConfig, SpeedEstimator};

use crate::config::TELEMETRY_LOG_INTERVAL;
use crate::encoder_tim::EncoderTimer;
use crate::state::{CURRENT_SAMPLE, MOTOR_STATUS};

/// テレメトリタスク
#[embassy_executor::task]
pub async fn telemetry_task(config: MotorConfig) {
    info!("Telemetry task started");

    let current = CurrentSensor::new(&CURRENT_SAMPLE, config.calibration);
    let encoder = SpeedEstimator::new(EncoderTimer::new(), config.encoder_sample_rate_hz);

    // 1/Fe 周期（100Hz → 10ms）
    let period_us = (1_000_000.0 / encoder.sample_rate_hz()) as u64;
    let mut ticker = Ticker::every(Duration::from_micros(period_us));

    let mut previous = encoder.position();
    let mut log_counter = 0u32;

    loop {
        ticker.next().await;

        let speed = encoder.speed(previous);
        previous = encoder.position();

        log_counter += 1;
        if log_counter >= TELEMETRY_LOG_INTERVAL {
            log_counter = 0;
            let status = *MOTOR_STATUS.lock().await;
            info!(
                "[Motor] running={}, duty={}/{}, cmd={}, current={}A (raw {}), speed={}, pos={}",
                status.running,
                status.duty,
                status.max_duty,
                status.speed_command,
                current.read_current(),
                current.raw(),
                speed,
                previous
            );
        }
    }
}
