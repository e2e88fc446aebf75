//! モーター制御の外部インターフェース
//!
//! ランプコントローラ、速度指令変換、電流センサー、速度推定器をまとめ、
//! 外部（コマンド受信側・テレメトリ）から呼ぶ操作を提供します。

use embedded_hal_async::delay::DelayNs;

use crate::config::MotorConfig;
use crate::control::{RampController, SpeedCommand, SpeedTranslator};
use crate::hal::{ComplementaryOutput, QuadratureCounter};
use crate::sensors::{CurrentSensor, SampleCell, SpeedEstimator};

/// モーター
pub struct Motor<'a, P, D, E>
where
    P: ComplementaryOutput,
    D: DelayNs,
    E: QuadratureCounter,
{
    ramp: RampController<P, D>,
    translator: SpeedTranslator,
    current: CurrentSensor<'a>,
    encoder: SpeedEstimator<E>,
}

impl<'a, P, D, E> Motor<'a, P, D, E>
where
    P: ComplementaryOutput,
    D: DelayNs,
    E: QuadratureCounter,
{
    /// # Arguments
    /// * `pwm` - 相補PWM出力
    /// * `delay` - ランプのステップ間遅延
    /// * `counter` - エンコーダーカウンタ
    /// * `sample` - バックグラウンドで更新される電流サンプル
    /// * `config` - 実行時設定
    pub fn new(pwm: P, delay: D, counter: E, sample: &'a SampleCell, config: &MotorConfig) -> Self {
        Self {
            ramp: RampController::new(pwm, delay, config.ramp_step_delay_us),
            translator: SpeedTranslator::new(config.speed_command_max),
            current: CurrentSensor::new(sample, config.calibration),
            encoder: SpeedEstimator::new(counter, config.encoder_sample_rate_hz),
        }
    }

    /// モーター起動（Duty比50%、全出力有効）
    pub fn start(&mut self) {
        self.ramp.start();
    }

    /// モーター停止（Duty比0%、全出力無効）
    pub fn stop(&mut self) {
        self.ramp.stop();
    }

    /// エンコーダー起動（モーター起動とは別の操作）
    pub fn encoder_start(&mut self) {
        self.encoder.start();
    }

    /// 速度指令を受け付けてランプを実行
    ///
    /// ランプ完了まで戻りません。
    ///
    /// # Returns
    /// 飽和済みの速度指令
    pub async fn set_speed(&mut self, cmd: &str) -> SpeedCommand {
        let command = self.translator.command(cmd);
        let target = self.translator.duty_for(command, self.ramp.max_duty());
        info!("Speed command {} -> duty {}", command.value(), target);
        self.ramp.ramp_to(target).await;
        command
    }

    /// 電流 [A]
    pub fn current(&self) -> f32 {
        self.current.read_current()
    }

    /// 速度（`previous` は `1/Fe` 秒前の位置）
    pub fn speed(&self, previous: i16) -> f32 {
        self.encoder.speed(previous)
    }

    /// 現在位置（エンコーダー生カウンタ）
    pub fn position(&self) -> i16 {
        self.encoder.position()
    }

    /// 現在のDuty比
    pub fn duty(&self) -> u16 {
        self.ramp.duty()
    }

    pub fn ramp(&self) -> &RampController<P, D> {
        &self.ramp
    }
}
