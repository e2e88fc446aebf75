//! モーター制御とセンサーの設定パラメータ（デフォルト値）

/// 速度指令の上限（これを超える指令は飽和）
pub const SPEED_COMMAND_MAX: u16 = 3000;

/// ランプ1ステップあたりの待ち時間 [μs]
pub const DEFAULT_RAMP_STEP_DELAY_US: u32 = 20_000;

/// エンコーダー速度計算のサンプリング周波数 Fe [Hz]
pub const ENCODER_SAMPLE_RATE_HZ: f32 = 100.0;

/// 電流センサーの校正値
pub mod current {
    /// ADCフルスケール（12ビット）
    pub const ADC_FULL_SCALE: f32 = 4095.0;

    /// ADC基準電圧 [V]
    pub const V_REF: f32 = 3.3;

    /// 電流0Aでのセンサー出力電圧 [V]
    pub const V_OFFSET: f32 = 1.95;

    /// 感度 [V/A]
    pub const SENSITIVITY: f32 = 0.05;
}

/// PWM設定
pub mod pwm {
    /// PWM周波数 [Hz]
    pub const DEFAULT_FREQUENCY_HZ: u32 = 20_000;

    /// デッドタイム
    pub const DEFAULT_DEAD_TIME: u16 = 100;
}

/// ADCサンプリング設定
pub mod adc {
    /// バックグラウンドサンプリング周期 [μs]
    pub const DEFAULT_SAMPLE_PERIOD_US: u64 = 1_000;
}
