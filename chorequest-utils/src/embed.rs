use poise::serenity_prelude as serenity;

use crate::formatting::to_persian_digits;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x4F_46_E5;
/// Accent for celebrations (task done, purchase made).
pub const SUCCESS_EMBED_COLOR: u32 = 0x22_C5_5E;
/// Accent for the parents' panel.
pub const PARENT_EMBED_COLOR: u32 = 0xEF_44_44;

/// Footer text for a page, empty when there is only one page and no note.
pub fn page_footer_text(page: usize, total_pages: usize, footer_note: Option<&str>) -> String {
    let page = page.max(1);
    let total_pages = total_pages.max(1);
    let note = footer_note.filter(|note| !note.is_empty());

    match (total_pages > 1, note) {
        (true, Some(note)) => format!(
            "صفحه {} از {} • {}",
            to_persian_digits(page),
            to_persian_digits(total_pages),
            note
        ),
        (true, None) => format!(
            "صفحه {} از {}",
            to_persian_digits(page),
            to_persian_digits(total_pages)
        ),
        (false, Some(note)) => note.to_owned(),
        (false, None) => String::new(),
    }
}

/// Build a standard paginated embed with an optional footer suffix.
pub fn build_paginated_embed(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> serenity::CreateEmbed {
    let footer_text = page_footer_text(page, total_pages, footer_note);

    let builder = serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    if footer_text.is_empty() {
        builder
    } else {
        builder.footer(serenity::CreateEmbedFooter::new(footer_text))
    }
}

/// Plain embed with the default color.
pub fn simple_embed(title: &str, description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.to_owned())
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
}

#[cfg(test)]
mod tests {
    use super::page_footer_text;

    #[test]
    fn footers() {
        assert_eq!(page_footer_text(1, 1, None), "");
        assert_eq!(page_footer_text(1, 1, Some("نکته")), "نکته");
        assert_eq!(page_footer_text(2, 3, None), "صفحه ۲ از ۳");
        assert_eq!(page_footer_text(0, 3, Some("")), "صفحه ۱ از ۳");
        assert_eq!(page_footer_text(2, 3, Some("نکته")), "صفحه ۲ از ۳ • نکته");
    }
}
