//! 電流サンプリングタスク
//!
//! 一定周期でADC1を読み取り、最新値セルを上書きします。
//! 読み出し側（電流センサー）とは同期しません。

use embassy_stm32::{
    adc::{Adc, AnyAdcChannel},
    peripherals,
};
use embassy_time::Ticker;

use crate::config;
use crate::state::CURRENT_SAMPLE;

/// 電流サンプリングタスク
#[embassy_executor::task]
pub async fn current_sampler_task(
    mut adc: Adc<'static, peripherals::ADC1>,
    mut current_pin: AnyAdcChannel<peripherals::ADC1>,
) {
    info!("Current sampler task started");

    // 初回サンプルで最新値セルを埋める
    let initial = adc.blocking_read(&mut current_pin);
    CURRENT_SAMPLE.store(initial);
    info!("Initial current sample: ADC raw={}", initial);

    let mut ticker = Ticker::every(config::adc::SAMPLE_PERIOD);

    loop {
        ticker.next().await;
        CURRENT_SAMPLE.store(adc.blocking_read(&mut current_pin));
    }
}
