//! ハードウェア初期化モジュール
//!
//! ペリフェラルの初期化ロジックを集約します。

use embassy_stm32::{
    gpio::OutputType,
    peripherals,
    timer::{
        complementary_pwm::{ComplementaryPwm, ComplementaryPwmPin},
        low_level::CountingMode,
        simple_pwm::PwmPin,
    },
    Config, Peri,
};

use crate::config;

/// RCCクロック設定を初期化
///
/// HSI → PLL（÷4 × 85 ÷ 2）で170MHz生成
pub fn create_clock_config() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::mux::{Adcsel, ClockMux};
        use embassy_stm32::rcc::{Pll, PllMul, PllPreDiv, PllRDiv, PllSource, Sysclk};

        config.rcc.hsi = true;
        config.rcc.pll = Some(Pll {
            source: PllSource::HSI,
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL85,
            divp: None,
            divq: None,
            divr: Some(PllRDiv::DIV2),
        });
        config.rcc.sys = Sysclk::PLL1_R; // システムクロックをPLLに設定

        let mut clock_mux = ClockMux::default();
        clock_mux.adc12sel = Adcsel::SYS;
        config.rcc.mux = clock_mux;
    }
    config
}

/// TIM1 相補PWM初期化（CH1/CH1N、CH2/CH2N）
///
/// PE9=CH1、PE8=CH1N、PE11=CH2、PE10=CH2N
pub fn init_bridge_pwm(
    tim1: Peri<'static, peripherals::TIM1>,
    ch1: Peri<'static, peripherals::PE9>,
    ch1n: Peri<'static, peripherals::PE8>,
    ch2: Peri<'static, peripherals::PE11>,
    ch2n: Peri<'static, peripherals::PE10>,
) -> ComplementaryPwm<'static, peripherals::TIM1> {
    let mut pwm = ComplementaryPwm::new(
        tim1,
        Some(PwmPin::new(ch1, OutputType::PushPull)),
        Some(ComplementaryPwmPin::new(ch1n, OutputType::PushPull)),
        Some(PwmPin::new(ch2, OutputType::PushPull)),
        Some(ComplementaryPwmPin::new(ch2n, OutputType::PushPull)),
        None,
        None,
        None,
        None,
        config::pwm::FREQUENCY,
        CountingMode::EdgeAlignedUp,
    );
    pwm.set_dead_time(config::pwm::DEAD_TIME);
    pwm
}
