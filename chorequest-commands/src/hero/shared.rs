use chorequest_core::{Context, Error};
use chorequest_database::impls::users::get_user;
use chorequest_database::model::users::UserProfile;
use chorequest_utils::parse::parse_any_date;
use chorequest_utils::time::{local_today, now_unix_secs};
use chrono::NaiveDate;

use crate::hero::embeds::not_registered_message;

/// Load the caller's profile, telling them to run `!start` when missing.
pub async fn require_profile(ctx: Context<'_>) -> Result<Option<UserProfile>, Error> {
    let profile = get_user(&ctx.data().db, ctx.author().id.get()).await?;
    if profile.is_none() {
        ctx.say(not_registered_message()).await?;
    }
    Ok(profile)
}

pub fn today(ctx: Context<'_>) -> NaiveDate {
    local_today(now_unix_secs(), ctx.data().settings.utc_offset_minutes)
}

/// The requested day, or local today when none was given. `None` means the
/// input could not be read as a date.
pub fn resolve_day(ctx: Context<'_>, raw: Option<&str>) -> Option<NaiveDate> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => parse_any_date(raw),
        None => Some(today(ctx)),
    }
}
