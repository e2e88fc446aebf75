#![no_std]
#![no_main]

// ログマクロは他モジュールより先に宣言
mod fmt;

mod config;
mod encoder_tim;
mod hardware;
mod motor_driver;
mod state;
mod tasks;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use embassy_executor::Spawner;
use embassy_stm32::adc::{Adc, AdcChannel, SampleTime};
use embassy_time::{Duration, Timer};

use config::MotorConfig;
use motor_driver::MotorDriver;
use state::{MotorCommand, MOTOR_COMMANDS};
use tasks::{current_sampler_task, motor_control_task, telemetry_task};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // ハードウェア初期化
    let p = embassy_stm32::init(hardware::create_clock_config());

    info!("═══════════════════════════════════════════════");
    info!("    H-Bridge DC Motor Driver • STM32G431VB @ 170MHz");
    info!("═══════════════════════════════════════════════");

    // 設定（コンパイル時のデフォルト値）
    let motor_config = MotorConfig::default();
    info!(
        "  Speed command max: {}, encoder Fe: {}Hz",
        motor_config.speed_command_max, motor_config.encoder_sample_rate_hz
    );
    info!(
        "  Speed PID (unused): Kp={}, Ki={}, Kd={}, dt={}",
        motor_config.speed_pid.kp,
        motor_config.speed_pid.ki,
        motor_config.speed_pid.kd,
        motor_config.speed_pid.dt
    );

    // ADC初期化＆電流サンプリングタスク起動（PA0 = ADC1_IN1）
    let mut adc1 = Adc::new(p.ADC1);
    adc1.set_sample_time(SampleTime::CYCLES640_5);
    let current_pin = p.PA0.degrade_adc();
    spawner
        .spawn(current_sampler_task(adc1, current_pin))
        .unwrap();
    info!("Current sampling started on PA0 (ADC1_IN1)");

    // PWM初期化（TIM1、Hブリッジ2相）
    let pwm = hardware::init_bridge_pwm(p.TIM1, p.PE9, p.PE8, p.PE11, p.PE10);
    let driver = MotorDriver::new(pwm);

    // モーター制御タスク起動（TIM3エンコーダーの開始もここで行う）
    spawner
        .spawn(motor_control_task(driver, motor_config))
        .unwrap();
    spawner.spawn(telemetry_task(motor_config)).unwrap();

    // デバッグ用: 起動して固定の速度指令を送る
    MOTOR_COMMANDS.send(MotorCommand::Start).await;
    match MotorCommand::set_speed(config::DEBUG_STARTUP_SPEED_COMMAND) {
        Some(command) => MOTOR_COMMANDS.send(command).await,
        None => warn!("Startup speed command too long"),
    }

    // メインループ（将来の拡張用）
    loop {
        Timer::after(Duration::from_millis(100)).await;
    }
}
