//! Dashboard presenter - derives everything the dashboard shows from one
//! user snapshot. Produces plain data; rendering happens elsewhere.

use crate::{QrPayload, format_time_ago};

use mt_core::{Kiosk, TOTAL_ACTIVITIES, UserRecord};

use chrono::{DateTime, Utc};
use serde::Serialize;

const MAX_LEVEL_MESSAGE: &str = "🏆 Maximum level reached!";
const ACTIVITY_DETAIL: &str = "Activity completed ✓";

/// One line of the "recent activity" feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub kiosk: Kiosk,
    pub icon: &'static str,
    pub title: String,
    pub detail: &'static str,
}

/// Per-kiosk completion badge, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KioskBadge {
    pub kiosk: Kiosk,
    pub name: &'static str,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub first_name: String,
    pub full_name: String,
    pub trail_id: String,
    pub points_label: String,
    /// Raw length of `completedQuizzes`; quiz ids are not catalogued
    pub quizzes_completed: usize,
    /// Distinct catalog kiosks only, unlike `quizzes_completed`. Repeats and
    /// unknown ids in `completedGames` are not counted.
    pub games_played: usize,
    pub card_version: u8,
    pub version_label: String,
    pub version_color: &'static str,
    /// 0-100
    pub progress_percent: u32,
    pub progress_label: String,
    pub next_upgrade: String,
    pub registered_label: String,
    /// Most recent first
    pub activities: Vec<ActivityEntry>,
    pub badges: Vec<KioskBadge>,
    pub qr: QrPayload,
}

pub struct Dashboard;

impl Dashboard {
    pub fn build(user: &UserRecord, now: DateTime<Utc>) -> DashboardView {
        let completed = user.completed_kiosks();
        let version = user.card_version;

        let activities = completed
            .iter()
            .rev()
            .map(|kiosk| ActivityEntry {
                kiosk: *kiosk,
                icon: kiosk.icon(),
                title: format!("{} Completed", kiosk.display_name()),
                detail: ACTIVITY_DETAIL,
            })
            .collect();

        let badges = Kiosk::ALL
            .into_iter()
            .map(|kiosk| KioskBadge {
                kiosk,
                name: kiosk.display_name(),
                earned: completed.contains(&kiosk),
            })
            .collect();

        let next_upgrade = if version.is_max() {
            String::from(MAX_LEVEL_MESSAGE)
        } else {
            format!(
                "Complete {} more to upgrade!",
                TOTAL_ACTIVITIES.saturating_sub(completed.len())
            )
        };

        DashboardView {
            first_name: user.first_name().to_string(),
            full_name: user.full_name.clone(),
            trail_id: user.trail_id.to_string(),
            points_label: format!("{} pts", user.points),
            quizzes_completed: user.completed_quizzes.len(),
            games_played: completed.len(),
            card_version: version.get(),
            version_label: format!("Version {version}"),
            version_color: version.color(),
            progress_percent: Self::progress_percent(completed.len()),
            progress_label: format!("{}/{TOTAL_ACTIVITIES} activities completed", completed.len()),
            next_upgrade,
            registered_label: format_time_ago(user.registered_at, now),
            activities,
            badges,
            qr: QrPayload::for_user(user),
        }
    }

    /// `min(100, 100 * completed / TOTAL_ACTIVITIES)`
    pub fn progress_percent(completed: usize) -> u32 {
        let percent = completed.saturating_mul(100) / TOTAL_ACTIVITIES;
        percent.min(100) as u32
    }
}
