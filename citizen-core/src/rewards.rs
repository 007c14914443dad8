use serde::{Deserialize, Serialize};

/// Redeemable reward in the points catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: u32,
    pub title: String,
    pub points: u32,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub available: bool,
    #[serde(default)]
    pub claimed: bool,
}

/// Whether the user can claim a reward right now. Drives the button state:
/// out-of-stock wins over a points shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimEligibility {
    Claimable,
    NeedMorePoints(u32),
    OutOfStock,
}

#[must_use]
pub fn claim_eligibility(user_points: u32, reward: &Reward) -> ClaimEligibility {
    if !reward.available {
        return ClaimEligibility::OutOfStock;
    }
    if user_points >= reward.points {
        ClaimEligibility::Claimable
    } else {
        ClaimEligibility::NeedMorePoints(reward.points - user_points)
    }
}

/// Progress (percent, clamped) toward affording a reward.
#[must_use]
pub fn claim_progress_pct(user_points: u32, cost: u32) -> u8 {
    if cost == 0 {
        return 100;
    }
    let pct = (u64::from(user_points) * 100) / u64::from(cost);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(points: u32, available: bool) -> Reward {
        Reward {
            id: 1,
            title: String::from("Local Cafe Voucher"),
            points,
            category: String::from("voucher"),
            description: String::from("Free coffee at participating local cafes"),
            icon: String::from("☕"),
            available,
            claimed: false,
        }
    }

    #[test]
    fn eligibility_reflects_points_balance() {
        assert_eq!(
            claim_eligibility(1250, &reward(200, true)),
            ClaimEligibility::Claimable
        );
        assert_eq!(
            claim_eligibility(1250, &reward(2000, true)),
            ClaimEligibility::NeedMorePoints(750)
        );
    }

    #[test]
    fn out_of_stock_wins_over_shortfall() {
        assert_eq!(
            claim_eligibility(0, &reward(200, false)),
            ClaimEligibility::OutOfStock
        );
        assert_eq!(
            claim_eligibility(9999, &reward(200, false)),
            ClaimEligibility::OutOfStock
        );
    }

    #[test]
    fn claim_progress_is_clamped() {
        assert_eq!(claim_progress_pct(500, 1000), 50);
        assert_eq!(claim_progress_pct(1500, 1000), 100);
        assert_eq!(claim_progress_pct(10, 0), 100);
    }
}
