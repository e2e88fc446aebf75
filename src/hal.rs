//! ハードウェア抽象化トレイト
//!
//! 制御ロジックが必要とするペリフェラル操作だけを定義します。
//! 実機では `firmware/` がSTM32のTIM1/TIM3で実装し、テストではモックで置き換えます。

/// 相補PWMチャネル
///
/// 各チャネルは主出力と相補出力（CHx / CHxN）のペアを持ちます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// 主チャネル（Duty値をそのまま出力）
    A,
    /// 相補チャネル（`max_duty - duty` を出力）
    B,
}

impl Channel {
    /// 両チャネル
    pub const ALL: [Channel; 2] = [Channel::A, Channel::B];
}

/// 相補PWM出力
pub trait ComplementaryOutput {
    /// PWM周期（コンペア値の上限）
    fn max_duty(&self) -> u16;

    /// コンペア値を設定
    fn set_compare(&mut self, channel: Channel, value: u16);

    /// チャネルの主出力と相補出力を有効化
    fn enable(&mut self, channel: Channel);

    /// チャネルの主出力と相補出力を無効化
    fn disable(&mut self, channel: Channel);
}

/// エンコーダーモードのフリーランカウンタ
pub trait QuadratureCounter {
    /// カウントを開始
    fn start(&mut self);

    /// 生カウンタ値（符号付き16ビット、ハードウェアに従いラップ）
    fn read_counter(&self) -> i16;
}
