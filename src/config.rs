//! Configuration module
//!
//! コンパイル時のデフォルト値（`params`）と、実行時に使う設定構造体を提供します。

pub mod params;

pub use params::*;

use crate::sensors::CurrentCalibration;

/// 設定検証のエラー型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// サンプリング周波数が0以下
    ZeroSampleRate,

    /// 電流センサー感度が0
    ZeroSensitivity,

    /// ADCフルスケールが0以下
    ZeroFullScale,

    /// 速度指令上限が0
    ZeroSpeedMax,
}

/// PIDパラメータ
///
/// 現在の制御はオープンループで、この値を使う制御器はありません。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PidParameter {
    /// 比例ゲイン
    pub kp: f32,
    /// 積分ゲイン
    pub ki: f32,
    /// 微分ゲイン
    pub kd: f32,
    /// 制御周期 [s]
    pub dt: f32,
}

/// モーター制御の実行時設定
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// ランプ1ステップあたりの待ち時間 [μs]（0で待ちなし）
    pub ramp_step_delay_us: u32,
    /// 速度指令の上限
    pub speed_command_max: u16,
    /// エンコーダーのサンプリング周波数 [Hz]
    pub encoder_sample_rate_hz: f32,
    /// 電流センサー校正値
    pub calibration: CurrentCalibration,
    /// 速度PIDパラメータ（未使用）
    pub speed_pid: PidParameter,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            ramp_step_delay_us: DEFAULT_RAMP_STEP_DELAY_US,
            speed_command_max: SPEED_COMMAND_MAX,
            encoder_sample_rate_hz: ENCODER_SAMPLE_RATE_HZ,
            calibration: CurrentCalibration::default(),
            speed_pid: PidParameter::default(),
        }
    }
}

impl MotorConfig {
    /// 換算式が意味を持たない値を検出
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.encoder_sample_rate_hz > 0.0) {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.calibration.sensitivity == 0.0 {
            return Err(ConfigError::ZeroSensitivity);
        }
        if !(self.calibration.adc_full_scale > 0.0) {
            return Err(ConfigError::ZeroFullScale);
        }
        if self.speed_command_max == 0 {
            return Err(ConfigError::ZeroSpeedMax);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MotorConfig::default();
        assert_eq!(config.ramp_step_delay_us, 20_000);
        assert_eq!(config.speed_command_max, 3000);
        assert_eq!(config.encoder_sample_rate_hz, 100.0);
        assert_eq!(config.calibration.v_offset, 1.95);
        assert_eq!(config.speed_pid, PidParameter::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = MotorConfig::default();
        config.encoder_sample_rate_hz = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleRate));

        let mut config = MotorConfig::default();
        config.calibration.sensitivity = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSensitivity));

        let mut config = MotorConfig::default();
        config.calibration.adc_full_scale = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFullScale));

        let mut config = MotorConfig::default();
        config.speed_command_max = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpeedMax));
    }

    #[test]
    fn test_zero_ramp_delay_is_valid() {
        let config = MotorConfig {
            ramp_step_delay_us: 0,
            ..MotorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
