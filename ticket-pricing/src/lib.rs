//! Ticket Pricing - 活动门票定价引擎
//!
//! # 架构概述
//!
//! 根据座位区域、活动属性、会员等级和促销计算订票最终价格。
//! 定价流水线的步骤顺序固定，每一步都作用于上一步的累计金额：
//!
//! ```text
//! 座位小计 → 周末附加费 → 预订费 → 会员折扣 → 促销折扣 → 高需求附加费 → 保底并取整
//! ```
//!
//! # 模块结构
//!
//! ```text
//! ticket-pricing/src/
//! ├── core/          # 配置
//! ├── booking/       # 订票请求 (校验 + 输入转换)
//! ├── pricing/       # 座位目录、费率表、定价流水线
//! ├── reporting/     # 付款摘要展示
//! └── utils/         # 日志
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shared::{Event, MembershipTier, Promo, SeatZone};
//! use ticket_pricing::compute_final_price;
//!
//! let event = Event::new("Campus Sport Day", true, Decimal::from(5));
//! let total = compute_final_price(
//!     &event,
//!     &[SeatZone::Balcony, SeatZone::Balcony, SeatZone::Balcony],
//!     MembershipTier::Silver,
//!     Some(Promo::fixed(Decimal::from(15))),
//! )?;
//! assert_eq!(total.to_string(), "177.85");
//! # Ok::<(), shared::PricingError>(())
//! ```

pub mod booking;
pub mod core;
pub mod pricing;
pub mod reporting;
pub mod utils;

// Re-export 公共类型
pub use booking::{BookingRequest, BookingRequestInput, MAX_BOOKING_FEE, load_booking};
pub use crate::core::Config;
pub use pricing::{
    PriceBreakdown, PricingStep, StepAmount, calculate_booking_price, compute_final_price,
    final_price,
};

// Re-export logger functions
pub use utils::logger::init_logger;

/// 设置环境: 加载 .env、读取配置、初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger(&config)?;
    Ok(config)
}
