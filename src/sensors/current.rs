//! モーター電流センサー
//!
//! バックグラウンドで更新される最新のADC生値を、固定の校正式で電流 [A] に変換します。
//! 平均化・フィルタ・鮮度チェックは行いません（単一サンプルをそのまま使用）。

use super::sample_cell::SampleCell;
use crate::config::params::current::{ADC_FULL_SCALE, SENSITIVITY, V_OFFSET, V_REF};

/// 電流センサー校正パラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentCalibration {
    /// ADCフルスケール値（12ビット = 4095）
    pub adc_full_scale: f32,
    /// ADC基準電圧 [V]
    pub v_ref: f32,
    /// 電流0Aでのセンサー出力 [V]
    pub v_offset: f32,
    /// 感度 [V/A]
    pub sensitivity: f32,
}

impl Default for CurrentCalibration {
    fn default() -> Self {
        Self {
            adc_full_scale: ADC_FULL_SCALE,
            v_ref: V_REF,
            v_offset: V_OFFSET,
            sensitivity: SENSITIVITY,
        }
    }
}

impl CurrentCalibration {
    /// ADC生値からセンサー出力電圧を計算
    ///
    /// # Arguments
    /// * `raw` - ADC生値（0-4095）
    pub fn raw_to_voltage(&self, raw: u16) -> f32 {
        raw as f32 * self.v_ref / self.adc_full_scale
    }

    /// ADC生値から電流を計算
    ///
    /// # Returns
    /// 電流 [A]
    pub fn raw_to_current(&self, raw: u16) -> f32 {
        (self.raw_to_voltage(raw) - self.v_offset) / self.sensitivity
    }
}

/// 電流センサー
pub struct CurrentSensor<'a> {
    sample: &'a SampleCell,
    calibration: CurrentCalibration,
}

impl<'a> CurrentSensor<'a> {
    pub fn new(sample: &'a SampleCell, calibration: CurrentCalibration) -> Self {
        Self {
            sample,
            calibration,
        }
    }

    /// 最新のADC生値
    pub fn raw(&self) -> u16 {
        self.sample.load()
    }

    /// 最新サンプルを電流 [A] に変換
    pub fn read_current(&self) -> f32 {
        self.calibration.raw_to_current(self.sample.load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_zero_sample() {
        let cell = SampleCell::new();
        let sensor = CurrentSensor::new(&cell, CurrentCalibration::default());
        // (0 - 1.95) / 0.05 = -39 A
        assert!((sensor.read_current() - (-39.0)).abs() < EPS);
    }

    #[test]
    fn test_full_scale_sample() {
        let cell = SampleCell::new();
        cell.store(4095);
        let sensor = CurrentSensor::new(&cell, CurrentCalibration::default());
        // (3.3 - 1.95) / 0.05 = 27 A
        assert!((sensor.read_current() - 27.0).abs() < EPS);
    }

    #[test]
    fn test_zero_current_point() {
        // 1.95V に相当する生値付近で電流がほぼ0になる
        let calibration = CurrentCalibration::default();
        let raw = (1.95 / 3.3 * 4095.0) as u16; // 2419
        assert!(calibration.raw_to_current(raw).abs() < 0.1);
        assert!(calibration.raw_to_current(raw) < calibration.raw_to_current(raw + 1));
    }

    #[test]
    fn test_reads_latest_sample() {
        let cell = SampleCell::new();
        let sensor = CurrentSensor::new(&cell, CurrentCalibration::default());

        cell.store(1000);
        let first = sensor.read_current();
        cell.store(3000);
        let second = sensor.read_current();

        assert_eq!(sensor.raw(), 3000);
        assert!(second > first);
        let expected = (3000.0 * 3.3 / 4095.0 - 1.95) / 0.05;
        assert!((second - expected).abs() < EPS);
    }

    #[test]
    fn test_custom_calibration() {
        let cell = SampleCell::new();
        cell.store(2048);
        let calibration = CurrentCalibration {
            adc_full_scale: 4096.0,
            v_ref: 3.3,
            v_offset: 1.65,
            sensitivity: 0.1,
        };
        let sensor = CurrentSensor::new(&cell, calibration);
        assert!(sensor.read_current().abs() < EPS);
    }
}
