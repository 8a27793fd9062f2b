use crate::utility::embeds::{
    grouped_help_description, page_out_of_range_message, unknown_category_message,
};
use crate::{COMMANDS, CommandMeta};
use chorequest_core::{Context, Error};
use chorequest_utils::pagination::{page_window, paginate_embed_pages, total_pages};
use chorequest_utils::parse::parse_position;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "فهرست همه‌ی دستورها.",
    category: "utility",
    usage: "!help [صفحه|دسته]",
};

const HELP_COMMANDS_PER_PAGE: usize = 12;

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "شماره‌ی صفحه یا دسته"] query: Option<String>,
) -> Result<(), Error> {
    let query = query.as_deref().map(str::trim);
    let parsed_page = query.and_then(parse_position);
    let category = match (query, parsed_page) {
        (Some(raw), None) => Some(raw.to_ascii_lowercase()),
        _ => None,
    };

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories))
            .await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    let requested_page = parsed_page.unwrap_or(1);
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);

    if requested_page > total {
        ctx.say(page_out_of_range_message(requested_page, total)).await?;
        return Ok(());
    }

    let pages = (1..=total)
        .map(|page| {
            let (start, end) = page_window(commands.len(), HELP_COMMANDS_PER_PAGE, page);
            grouped_help_description(&commands[start..end])
        })
        .collect::<Vec<_>>();
    paginate_embed_pages(
        ctx,
        "دستورهای قهرمان کوچولو",
        &pages,
        requested_page,
        Some("!usage <دستور>"),
    )
    .await?;
    Ok(())
}

/// Commands sorted by category then name, optionally filtered.
fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::sorted_commands;

    #[test]
    fn filters_by_category() {
        let parents = sorted_commands(Some("parents"));
        assert!(!parents.is_empty());
        assert!(parents.iter().all(|cmd| cmd.category == "parents"));
        assert!(parents.windows(2).all(|pair| pair[0].name <= pair[1].name));
    }

    #[test]
    fn everything_without_filter() {
        assert_eq!(sorted_commands(None).len(), crate::COMMANDS.len());
    }
}
