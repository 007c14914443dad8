use serde::{Deserialize, Serialize};

/// One row in the community rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub reports: u32,
    pub resolved: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub is_current_user: bool,
}

/// Rankings for both leaderboard periods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeaderboardData {
    pub monthly: Vec<LeaderboardEntry>,
    pub weekly: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
}

/// Top three entries for the podium display.
#[must_use]
pub fn podium(entries: &[LeaderboardEntry]) -> &[LeaderboardEntry] {
    &entries[..entries.len().min(3)]
}

#[must_use]
pub fn current_user(entries: &[LeaderboardEntry]) -> Option<&LeaderboardEntry> {
    entries.iter().find(|entry| entry.is_current_user)
}

/// Points still needed to overtake the nearest entry ranked above the
/// current user. `None` when the user is missing or already on top.
#[must_use]
pub fn next_rank_gap(entries: &[LeaderboardEntry]) -> Option<u32> {
    let user = current_user(entries)?;
    entries
        .iter()
        .filter(|entry| entry.rank < user.rank)
        .min_by_key(|entry| user.rank - entry.rank)
        .map(|above| above.points.saturating_sub(user.points) + 1)
}

/// Progress (percent) toward the nearest entry ranked above the user.
#[must_use]
pub fn rank_progress_pct(entries: &[LeaderboardEntry]) -> u8 {
    let Some(user) = current_user(entries) else {
        return 0;
    };
    let Some(above) = entries
        .iter()
        .filter(|entry| entry.rank < user.rank)
        .min_by_key(|entry| user.rank - entry.rank)
    else {
        return 100;
    };
    if above.points == 0 {
        return 100;
    }
    let pct = (u64::from(user.points) * 100) / u64::from(above.points);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, points: u32, is_current_user: bool) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: format!("Citizen {rank}"),
            points,
            reports: 10,
            resolved: 8,
            streak: 3,
            badge: None,
            is_current_user,
        }
    }

    #[test]
    fn podium_takes_at_most_three() {
        let entries = vec![
            entry(1, 2850, false),
            entry(2, 2640, false),
            entry(3, 2420, false),
            entry(42, 1250, true),
        ];
        assert_eq!(podium(&entries).len(), 3);
        assert_eq!(podium(&entries[..2]).len(), 2);
    }

    #[test]
    fn next_rank_gap_targets_nearest_rank_above() {
        let entries = vec![
            entry(1, 2850, false),
            entry(3, 2420, false),
            entry(42, 1250, true),
        ];
        // Nearest above is rank 3 with 2420 points: 1171 to overtake.
        assert_eq!(next_rank_gap(&entries), Some(1171));
    }

    #[test]
    fn gap_is_none_without_user_or_someone_above() {
        assert_eq!(next_rank_gap(&[entry(1, 100, false)]), None);
        assert_eq!(next_rank_gap(&[entry(1, 100, true)]), None);
    }

    #[test]
    fn rank_progress_is_clamped_percentage() {
        let entries = vec![entry(3, 2420, false), entry(42, 1250, true)];
        assert_eq!(rank_progress_pct(&entries), 51);
        assert_eq!(rank_progress_pct(&[entry(1, 100, true)]), 100);
        assert_eq!(rank_progress_pct(&[]), 0);
    }
}
