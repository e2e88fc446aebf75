//! Duty比ランプコントローラ
//!
//! 現在のDuty比を目標値まで1ステップずつ変化させ、ステップごとに
//! 主チャネルと相補チャネルのコンペア値を書き込み、一定時間待ちます（スルーレート制限）。
//!
//! Duty比はハードウェアから読み戻さず、`ActuatorState` として自身で保持します。

use embedded_hal_async::delay::DelayNs;

use crate::hal::{Channel, ComplementaryOutput};

/// アクチュエータ状態
///
/// `duty <= max_duty` はこのモジュール内でのみ更新して保証します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    /// 現在のDuty比（0..=max_duty）
    duty: u16,
    /// Duty比の上限（PWM周期）
    max_duty: u16,
}

impl ActuatorState {
    pub const fn new(max_duty: u16) -> Self {
        Self { duty: 0, max_duty }
    }

    pub const fn duty(&self) -> u16 {
        self.duty
    }

    pub const fn max_duty(&self) -> u16 {
        self.max_duty
    }

    /// 停止時のDuty比（0%）
    pub const fn min_duty(&self) -> u16 {
        0
    }

    /// 起動時のDuty比（50%）
    pub const fn rest_duty(&self) -> u16 {
        self.max_duty / 2
    }

    /// 相補チャネルのコンペア値
    pub const fn complement(&self) -> u16 {
        self.max_duty.saturating_sub(self.duty)
    }
}

/// Duty比ランプコントローラ
pub struct RampController<P: ComplementaryOutput, D: DelayNs> {
    pwm: P,
    delay: D,
    step_delay_us: u32,
    state: ActuatorState,
}

impl<P: ComplementaryOutput, D: DelayNs> RampController<P, D> {
    /// 新しいランプコントローラを作成
    ///
    /// # Arguments
    /// * `pwm` - 相補PWM出力（`max_duty` は作成時に一度だけ読む）
    /// * `delay` - ステップ間の待ちに使う遅延
    /// * `step_delay_us` - 1ステップあたりの待ち時間 [μs]
    pub fn new(pwm: P, delay: D, step_delay_us: u32) -> Self {
        let max_duty = pwm.max_duty();
        Self {
            pwm,
            delay,
            step_delay_us,
            state: ActuatorState::new(max_duty),
        }
    }

    /// 両チャネルに現在の状態を書き込む
    fn write_outputs(&mut self) {
        self.pwm.set_compare(Channel::A, self.state.duty);
        self.pwm.set_compare(Channel::B, self.state.complement());
    }

    /// 起動：Duty比50%を直接設定し、全出力を有効化
    pub fn start(&mut self) {
        self.state.duty = self.state.rest_duty();
        self.write_outputs();
        for channel in Channel::ALL {
            self.pwm.enable(channel);
        }
        info!(
            "PWM started: duty={}/{}",
            self.state.duty, self.state.max_duty
        );
    }

    /// 停止：Duty比0%を直接設定し、全出力を無効化
    pub fn stop(&mut self) {
        self.state.duty = self.state.min_duty();
        self.write_outputs();
        for channel in Channel::ALL {
            self.pwm.disable(channel);
        }
        info!("PWM stopped");
    }

    /// 目標Duty比までランプ
    ///
    /// 完了するまで呼び出し元を占有します（キャンセル不可）。
    /// 目標が上限を超える場合は上限に丸めます。
    ///
    /// # Returns
    /// 実行したステップ数（`|target - 開始時のduty|`）
    pub async fn ramp_to(&mut self, target: u16) -> u32 {
        let target = if target > self.state.max_duty {
            warn!(
                "Ramp target {} exceeds max duty {}, clamping",
                target, self.state.max_duty
            );
            self.state.max_duty
        } else {
            target
        };

        let start = self.state.duty;
        if target == start {
            return 0;
        }
        debug!("Ramp {} -> {}", start, target);

        let mut steps = 0u32;
        while self.state.duty != target {
            if target < self.state.duty {
                self.state.duty -= 1;
            } else {
                self.state.duty += 1;
            }
            self.write_outputs();
            trace!("Ramp step: duty={}", self.state.duty);
            self.delay.delay_us(self.step_delay_us).await;
            steps += 1;
        }

        debug!("Ramp done: duty={} ({} steps)", self.state.duty, steps);
        steps
    }

    /// 現在のDuty比
    pub fn duty(&self) -> u16 {
        self.state.duty
    }

    /// Duty比の上限
    pub fn max_duty(&self) -> u16 {
        self.state.max_duty
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }

    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    /// PWM出力への参照（テスト・診断用）
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}
