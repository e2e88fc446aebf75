//! タスクモジュール
//!
//! 各タスクの実装を分離して管理します。

pub mod current_sampler;
pub mod motor_control;
pub mod telemetry;

// タスク関数を再エクスポート
pub use current_sampler::current_sampler_task;
pub use motor_control::motor_control_task;
pub use telemetry::telemetry_task;
