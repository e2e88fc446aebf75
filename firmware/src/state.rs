//! グローバル共有状態管理
//!
//! タスク間で共有される状態を管理します。

use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use heapless::String;
use hbridge_drive::SampleCell;

use crate::config::{COMMAND_QUEUE_DEPTH, COMMAND_TEXT_CAPACITY};

/// 電流ADCの最新サンプル（サンプラータスクが上書き、電流センサーが読む）
pub static CURRENT_SAMPLE: SampleCell = SampleCell::new();

/// モーターへのコマンド
#[derive(Debug, Clone)]
pub enum MotorCommand {
    /// 起動（Duty比50%、全出力有効）
    Start,
    /// 停止（Duty比0%、全出力無効）
    Stop,
    /// 速度指令（テキストのまま渡す）
    SetSpeed(String<COMMAND_TEXT_CAPACITY>),
}

impl MotorCommand {
    /// 速度指令コマンドを作成
    ///
    /// 容量を超える文字列は `None`
    pub fn set_speed(text: &str) -> Option<Self> {
        let mut buffer = String::new();
        buffer.push_str(text).ok()?;
        Some(MotorCommand::SetSpeed(buffer))
    }
}

/// モーターコマンドキュー
///
/// ランプ実行中に届いたコマンドはランプ完了まで待たされます。
pub static MOTOR_COMMANDS: Channel<ThreadModeRawMutex, MotorCommand, COMMAND_QUEUE_DEPTH> =
    Channel::new();

/// モーターステータス（テレメトリ用）
#[derive(Debug, Clone, Copy)]
pub struct MotorStatus {
    /// PWM出力中か
    pub running: bool,
    /// 現在のDuty比
    pub duty: u16,
    /// Duty比の上限
    pub max_duty: u16,
    /// 最後に受け付けた速度指令（飽和済み）
    pub speed_command: u16,
}

impl MotorStatus {
    pub const fn new() -> Self {
        Self {
            running: false,
            duty: 0,
            max_duty: 0,
            speed_command: 0,
        }
    }
}

/// モーターステータス
pub static MOTOR_STATUS: Mutex<ThreadModeRawMutex, MotorStatus> = Mutex::new(MotorStatus::new());
