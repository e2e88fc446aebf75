//! Configuration module
//!
//! 制御コア（`hbridge_drive::config`）のデフォルト値に、
//! ボード固有の設定を加えます。

pub use hbridge_drive::config::{params, MotorConfig};

/// デバッグ用: 起動後に送る速度指令
pub const DEBUG_STARTUP_SPEED_COMMAND: &str = "1500";

/// モーターコマンドキューの深さ
pub const COMMAND_QUEUE_DEPTH: usize = 4;

/// 速度指令文字列の最大長
pub const COMMAND_TEXT_CAPACITY: usize = 16;

/// テレメトリのログ間隔（エンコーダーサンプル数、100Hz × 100 = 1秒）
pub const TELEMETRY_LOG_INTERVAL: u32 = 100;

/// PWM設定
pub mod pwm {
    use embassy_stm32::time::Hertz;

    use super::params;

    /// PWM周波数
    pub const FREQUENCY: Hertz = Hertz(params::pwm::DEFAULT_FREQUENCY_HZ);

    /// デッドタイム
    pub const DEAD_TIME: u16 = params::pwm::DEFAULT_DEAD_TIME;
}

/// ADC設定
pub mod adc {
    use embassy_time::Duration;

    use super::params;

    /// 電流サンプリング周期
    pub const SAMPLE_PERIOD: Duration = Duration::from_micros(params::adc::DEFAULT_SAMPLE_PERIOD_US);
}
