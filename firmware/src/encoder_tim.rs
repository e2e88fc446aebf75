//! TIM3ベースのエンコーダーインターフェース実装
//!
//! STM32のEncoder Mode 3（TI1/TI2両エッジカウント）で直交エンコーダーを読み取ります。
//! カウンタは16ビットのフリーランで、符号付きとして解釈します。
//!
//! ## ハードウェア構成
//! - TIM3_CH1 (PA6): エンコーダー A相
//! - TIM3_CH2 (PA4): エンコーダー B相
//! - ARR = 0xFFFF（ラップはハードウェアに任せる）

use embassy_stm32::pac;
use hbridge_drive::QuadratureCounter;

/// TIM3 Encoder Mode の初期化
///
/// # Safety
/// PACを使用した直接的なレジスタ操作を含むため、unsafe
pub unsafe fn init_encoder_timer() {
    let rcc = pac::RCC;
    let tim3 = pac::TIM3;
    let gpioa = pac::GPIOA;

    // 1. クロック有効化
    rcc.ahb2enr().modify(|w| w.set_gpioaen(true)); // GPIOA
    rcc.apb1enr1().modify(|w| w.set_tim3en(true)); // TIM3

    // 2. GPIO設定（PA6/PA4をAlternate Function AF2に設定、プルアップ有効）
    for pin in [6usize, 4] {
        gpioa
            .moder()
            .modify(|w| w.set_moder(pin, pac::gpio::vals::Moder::ALTERNATE));
        gpioa.afr(0).modify(|w| w.set_afr(pin, 2)); // AF2 (AFRL)
        gpioa
            .pupdr()
            .modify(|w| w.set_pupdr(pin, pac::gpio::vals::Pupdr::PULL_UP));
    }

    // 3. タイマーを停止して設定
    tim3.cr1().modify(|w| w.set_cen(false));
    tim3.psc().write_value(0);
    tim3.arr().write_value(pac::timer::regs::ArrCore(0xFFFF));

    // 4. CC1S = TI1、CC2S = TI2（値01はどちらも自チャネル入力）
    tim3.ccmr_input(0).modify(|w| {
        w.set_ccs(0, pac::timer::vals::CcmrInputCcs::TI4);
        w.set_ccs(1, pac::timer::vals::CcmrInputCcs::TI4);
        w.set_icf(0, pac::timer::vals::FilterValue::FCK_INT_N8);
        w.set_icf(1, pac::timer::vals::FilterValue::FCK_INT_N8);
    });

    // 5. 両チャネル非反転でキャプチャ有効
    tim3.ccer().modify(|w| {
        w.set_cce(0, true);
        w.set_ccp(0, false);
        w.set_cce(1, true);
        w.set_ccp(1, false);
    });

    // 6. SMS = Encoder Mode 3（TI1/TI2の両エッジでカウント）
    tim3.smcr().modify(|w| {
        w.set_sms(pac::timer::vals::Sms::ENCODER_MODE_3);
    });

    // 7. カウンタをリセットしてタイマー開始
    tim3.cnt().write_value(pac::timer::regs::CntCore(0));
    tim3.sr().write(|w| w.0 = 0);
    tim3.cr1().modify(|w| w.set_cen(true));
}

/// 生カウンタ値を取得
#[inline(always)]
pub fn read_counter() -> i16 {
    pac::TIM3.cnt().read().cnt() as i16
}

/// TIM3エンコーダーのハンドル
///
/// 読み出しはレジスタを直接読むだけなので、複数タスクで別々に持ってよい。
pub struct EncoderTimer {
    _private: (),
}

impl EncoderTimer {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl QuadratureCounter for EncoderTimer {
    fn start(&mut self) {
        info!("Initializing TIM3 encoder interface (PA6/PA4, mode 3)...");
        unsafe {
            init_encoder_timer();
        }
        info!("TIM3 encoder interface initialized");
    }

    fn read_counter(&self) -> i16 {
        read_counter()
    }
}
