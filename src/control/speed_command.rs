//! 速度指令の変換
//!
//! テキストの速度指令を整数として解釈し、`[0, 速度上限]` に飽和させてから
//! 目標Duty比に変換します。
//!
//! ## 変換式（バイポーラ）
//! `alpha = 0.5 * (1 + v / v_max) * alpha_max`
//!
//! 速度0がDuty比50%、速度上限がDuty比100%に対応します。
//! 実装は `alpha_max * (v_max + v) / (2 * v_max)` の整数演算で、結果は0方向に切り捨てます。

use crate::config::params::SPEED_COMMAND_MAX;

/// 指令文字列の解釈結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParsedMagnitude {
    /// 数値として解釈できた（範囲外も含む）
    Value(i32),
    /// 数字が1つもなかった（大きさ0として扱う）
    ParseFailure,
}

impl ParsedMagnitude {
    /// 解釈結果の大きさ（`ParseFailure` は0）
    pub fn magnitude(self) -> i32 {
        match self {
            ParsedMagnitude::Value(v) => v,
            ParsedMagnitude::ParseFailure => 0,
        }
    }
}

/// 指令文字列を整数として解釈（ベストエフォート）
///
/// 先頭の空白を読み飛ばし、符号を1つ受け付け、数字が続く限り読みます。
/// 最初の非数字で打ち切り、残りは無視します。オーバーフローは `i32` の範囲に飽和します。
pub fn parse_magnitude(text: &str) -> ParsedMagnitude {
    let mut bytes = text
        .as_bytes()
        .iter()
        .copied()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    while let Some(b) = bytes.next_if(u8::is_ascii_digit) {
        // i32を超えたら以降の桁は飽和値を変えない
        if value <= i32::MAX as i64 + 1 {
            value = value * 10 + (b - b'0') as i64;
        }
        digits += 1;
    }

    if digits == 0 {
        return ParsedMagnitude::ParseFailure;
    }

    let signed = if negative { -value } else { value };
    ParsedMagnitude::Value(signed.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// 飽和済みの速度指令（0..=上限）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedCommand {
    value: u16,
}

impl SpeedCommand {
    /// 大きさを `[0, max]` に飽和
    pub fn from_magnitude(magnitude: i32, max: u16) -> Self {
        Self {
            value: magnitude.clamp(0, max as i32) as u16,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }
}

/// 速度指令 → 目標Duty比の変換器
#[derive(Debug, Clone, Copy)]
pub struct SpeedTranslator {
    speed_max: u16,
}

impl Default for SpeedTranslator {
    fn default() -> Self {
        Self::new(SPEED_COMMAND_MAX)
    }
}

impl SpeedTranslator {
    pub fn new(speed_max: u16) -> Self {
        Self { speed_max }
    }

    pub fn speed_max(&self) -> u16 {
        self.speed_max
    }

    /// 指令文字列を飽和済み速度指令に変換
    pub fn command(&self, text: &str) -> SpeedCommand {
        let parsed = parse_magnitude(text);
        if parsed == ParsedMagnitude::ParseFailure {
            warn!("Speed command is not numeric, treating as 0");
        }
        let command = SpeedCommand::from_magnitude(parsed.magnitude(), self.speed_max);
        if command.value() as i32 != parsed.magnitude() {
            debug!(
                "Speed command {} saturated to {}",
                parsed.magnitude(),
                command.value()
            );
        }
        command
    }

    /// 速度指令をDuty比に変換
    ///
    /// # Arguments
    /// * `command` - 飽和済み速度指令
    /// * `max_duty` - Duty比の上限（PWM周期）
    pub fn duty_for(&self, command: SpeedCommand, max_duty: u16) -> u16 {
        // 整数演算で切り捨て（浮動小数の丸めで1小さくならないように）
        let speed_max = self.speed_max.max(1) as u32;
        let v = (command.value() as u32).min(speed_max);
        let alpha = max_duty as u32 * (speed_max + v) / (2 * speed_max);
        alpha as u16
    }

    /// 指令文字列を直接Duty比に変換
    pub fn translate(&self, text: &str, max_duty: u16) -> u16 {
        self.duty_for(self.command(text), max_duty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_magnitude("1500"), ParsedMagnitude::Value(1500));
        assert_eq!(parse_magnitude("-10"), ParsedMagnitude::Value(-10));
        assert_eq!(parse_magnitude("+42"), ParsedMagnitude::Value(42));
        assert_eq!(parse_magnitude("0"), ParsedMagnitude::Value(0));
    }

    #[test]
    fn test_parse_best_effort() {
        // 先頭空白、末尾のゴミ（改行など）
        assert_eq!(parse_magnitude("  250\r\n"), ParsedMagnitude::Value(250));
        assert_eq!(parse_magnitude("12abc"), ParsedMagnitude::Value(12));
        assert_eq!(parse_magnitude("7 8"), ParsedMagnitude::Value(7));
    }

    #[test]
    fn test_parse_failure() {
        assert_eq!(parse_magnitude(""), ParsedMagnitude::ParseFailure);
        assert_eq!(parse_magnitude("abc"), ParsedMagnitude::ParseFailure);
        assert_eq!(parse_magnitude("-"), ParsedMagnitude::ParseFailure);
        assert_eq!(parse_magnitude(" + 5"), ParsedMagnitude::ParseFailure);
        assert_eq!(ParsedMagnitude::ParseFailure.magnitude(), 0);
    }

    #[test]
    fn test_parse_overflow_saturates() {
        assert_eq!(
            parse_magnitude("99999999999999999999"),
            ParsedMagnitude::Value(i32::MAX)
        );
        assert_eq!(
            parse_magnitude("-99999999999999999999"),
            ParsedMagnitude::Value(i32::MIN)
        );
    }

    #[test]
    fn test_command_saturation() {
        let translator = SpeedTranslator::default();
        assert_eq!(translator.command("5000").value(), 3000);
        assert_eq!(translator.command("-10").value(), 0);
        assert_eq!(translator.command("1234").value(), 1234);
        assert_eq!(translator.command("xyz").value(), 0);
    }

    #[test]
    fn test_saturated_inputs_behave_like_bounds() {
        let translator = SpeedTranslator::default();
        assert_eq!(
            translator.translate("5000", 1000),
            translator.translate("3000", 1000)
        );
        assert_eq!(
            translator.translate("-10", 1000),
            translator.translate("0", 1000)
        );
    }

    #[test]
    fn test_bipolar_mapping_bounds() {
        let translator = SpeedTranslator::default();
        // 速度0 → 50%、速度上限 → 100%
        assert_eq!(translator.translate("0", 1000), 500);
        assert_eq!(translator.translate("3000", 1000), 1000);
        assert_eq!(translator.translate("1500", 1000), 750);
        assert_eq!(translator.translate("0", 1023), 1023 / 2);
        assert_eq!(translator.translate("3000", 1023), 1023);
    }

    #[test]
    fn test_parse_failure_maps_to_rest_duty() {
        let translator = SpeedTranslator::default();
        assert_eq!(translator.translate("stop", 1000), 500);
    }

    #[test]
    fn test_mapping_matches_exact_truncation() {
        let translator = SpeedTranslator::default();
        let speed_max = translator.speed_max() as u32;
        for max_duty in [1000u16, 1023, 4249, 8499, 8500, 12000, 60000, u16::MAX] {
            for v in 0..=speed_max {
                let expected = (max_duty as u32 * (speed_max + v) / (2 * speed_max)) as u16;
                let duty =
                    translator.duty_for(SpeedCommand::from_magnitude(v as i32, 3000), max_duty);
                assert_eq!(duty, expected, "max_duty={} v={}", max_duty, v);
            }
        }
        // 0.5 * (1 + 12/3000) * 1000 = 502
        assert_eq!(translator.translate("12", 1000), 502);
    }

    #[test]
    fn test_zero_speed_max_gives_rest_duty() {
        let translator = SpeedTranslator::new(0);
        assert_eq!(translator.translate("100", 1000), 500);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let translator = SpeedTranslator::default();
        let mut previous = 0u16;
        for v in 0..=3000 {
            let duty = translator.duty_for(SpeedCommand::from_magnitude(v, 3000), 4249);
            assert!(duty >= previous);
            assert!(duty <= 4249);
            previous = duty;
        }
    }
}
