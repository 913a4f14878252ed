//! Payment summary rendering

use crate::booking::BookingRequest;
use crate::pricing::PriceBreakdown;
use shared::{Promo, PromoType, SeatZone};
use std::fmt::Write;

/// `[VIP, VIP, PREMIUM]`
pub fn format_seats(seats: &[SeatZone]) -> String {
    let names: Vec<&str> = seats.iter().map(SeatZone::as_str).collect();
    format!("[{}]", names.join(", "))
}

/// `NONE`, `PERCENT 10%`, `STUDENT 15%` or `FIXED RM15`
pub fn format_promo(promo: Option<&Promo>, currency: &str) -> String {
    match promo {
        None => PromoType::None.to_string(),
        Some(p) => match p.promo_type {
            PromoType::None => PromoType::None.to_string(),
            PromoType::Percent | PromoType::Student => {
                format!("{} {}%", p.promo_type, p.value.normalize())
            }
            PromoType::Fixed => format!("{} {}{}", p.promo_type, currency, p.value.normalize()),
        },
    }
}

/// Render the payment summary block printed by the CLI
pub fn render_summary(
    title: &str,
    request: &BookingRequest,
    breakdown: &PriceBreakdown,
    currency: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", title);
    let _ = writeln!(out, "Event: {}", request.event().name);
    let _ = writeln!(out, "Seats: {}", format_seats(request.seats()));
    let _ = writeln!(out, "Membership: {}", request.tier());
    let _ = writeln!(out, "Promo: {}", format_promo(request.promo(), currency));
    let _ = writeln!(out, "Final Total: {} {}", currency, breakdown.total);
    out
}

/// One line per pipeline step; skipped steps are marked
pub fn render_breakdown(breakdown: &PriceBreakdown, currency: &str) -> String {
    let mut out = String::new();
    for (index, step) in breakdown.steps.iter().enumerate() {
        let marker = if step.applied { "" } else { " (skipped)" };
        let _ = writeln!(
            out,
            "{}. {:<22} {} {}{}",
            index + 1,
            step.step.label(),
            currency,
            step.amount,
            marker
        );
    }
    out
}
