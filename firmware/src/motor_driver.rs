//! モータードライバー抽象化レイヤー
//!
//! TIM1の相補PWM（CH1/CH1N、CH2/CH2N）を `ComplementaryOutput` として提供します。
//! ハーフブリッジ2組でHブリッジを構成します。

use embassy_stm32::{
    peripherals,
    timer::{complementary_pwm::ComplementaryPwm, Channel as TimChannel},
};
use hbridge_drive::{Channel, ComplementaryOutput};

/// Hブリッジドライバー
pub struct MotorDriver {
    pwm: ComplementaryPwm<'static, peripherals::TIM1>,
    max_duty: u16,
}

impl MotorDriver {
    /// 新しいモータードライバーを作成
    ///
    /// 作成時は全チャネル無効（起動は `Motor::start` で行う）
    ///
    /// # 引数
    /// * `pwm` - PWMペリフェラル（TIM1）
    pub fn new(mut pwm: ComplementaryPwm<'static, peripherals::TIM1>) -> Self {
        pwm.disable(TimChannel::Ch1);
        pwm.disable(TimChannel::Ch2);
        let max_duty = pwm.get_max_duty();
        Self { pwm, max_duty }
    }

    fn timer_channel(channel: Channel) -> TimChannel {
        match channel {
            Channel::A => TimChannel::Ch1,
            Channel::B => TimChannel::Ch2,
        }
    }
}

impl ComplementaryOutput for MotorDriver {
    fn max_duty(&self) -> u16 {
        self.max_duty
    }

    fn set_compare(&mut self, channel: Channel, value: u16) {
        self.pwm.set_duty(Self::timer_channel(channel), value);
    }

    fn enable(&mut self, channel: Channel) {
        // CCxE と CCxNE を同時に有効化
        self.pwm.enable(Self::timer_channel(channel));
    }

    fn disable(&mut self, channel: Channel) {
        self.pwm.disable(Self::timer_channel(channel));
    }
}
