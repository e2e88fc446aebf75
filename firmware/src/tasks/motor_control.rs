//! モーター制御タスク
//!
//! コマンドキューからコマンドを受け取り、起動・停止・速度ランプを実行します。
//! ランプ中は次のコマンドを受け付けません（キューで待たされる）。

use embassy_time::Delay;
use hbridge_drive::{Motor, MotorConfig};

use crate::encoder_tim::EncoderTimer;
use crate::motor_driver::MotorDriver;
use crate::state::{MotorCommand, CURRENT_SAMPLE, MOTOR_COMMANDS, MOTOR_STATUS};

type BridgeMotor = Motor<'static, MotorDriver, Delay, EncoderTimer>;

/// ステータスを更新
async fn publish_status(motor: &BridgeMotor, running: bool, speed_command: Option<u16>) {
    let mut status = MOTOR_STATUS.lock().await;
    status.running = running;
    status.duty = motor.duty();
    status.max_duty = motor.ramp().max_duty();
    if let Some(command) = speed_command {
        status.speed_command = command;
    }
}

/// モーター制御タスク
#[embassy_executor::task]
pub async fn motor_control_task(driver: MotorDriver, config: MotorConfig) {
    info!("Motor control task started");

    let mut motor = Motor::new(driver, Delay, EncoderTimer::new(), &CURRENT_SAMPLE, &config);

    // エンコーダーはモーター起動とは別に開始
    motor.encoder_start();

    info!(
        "Ramp: {}us/step, max duty {}",
        motor.ramp().step_delay_us(),
        motor.ramp().max_duty()
    );
    publish_status(&motor, false, None).await;

    let mut running = false;

    loop {
        match MOTOR_COMMANDS.receive().await {
            MotorCommand::Start => {
                motor.start();
                running = true;
                publish_status(&motor, running, Some(0)).await;
            }
            MotorCommand::Stop => {
                motor.stop();
                running = false;
                publish_status(&motor, running, Some(0)).await;
            }
            MotorCommand::SetSpeed(text) => {
                if !running {
                    warn!("Speed command received while stopped, ramping anyway");
                }
                let command = motor.set_speed(text.as_str()).await;
                publish_status(&motor, running, Some(command.value())).await;
                info!(
                    "Ramp complete: duty={}, current={}A, position={}",
                    motor.duty(),
                    motor.current(),
                    motor.position()
                );
            }
        }
    }
}
