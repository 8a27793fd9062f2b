use chorequest_utils::formatting::{sanitize_user_text, to_persian_digits};

use crate::CommandMeta;

pub fn display_category(category: &str) -> &str {
    match category {
        "hero" => "قهرمان",
        "parents" => "والدین",
        "utility" => "راهنما",
        other => other,
    }
}

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| format!("`{}` ({})", category, display_category(category)))
        .collect::<Vec<_>>()
        .join("، ");

    format!(
        "دسته‌ی ناشناخته: `{}`\nدسته‌ها: {}",
        sanitize_user_text(wanted_category),
        valid
    )
}

pub fn page_out_of_range_message(requested_page: usize, total_pages: usize) -> String {
    format!(
        "صفحه‌ی {} وجود ندارد. صفحه‌ها: ۱ تا {}",
        to_persian_digits(requested_page),
        to_persian_digits(total_pages)
    )
}

pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("`{}`: {}\n", command.name, command.desc));
    }

    if out.is_empty() {
        out.push_str("دستوری پیدا نشد.");
    }

    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::{grouped_help_description, unknown_category_message};
    use crate::CommandMeta;

    const TASKS: CommandMeta = CommandMeta {
        name: "tasks",
        desc: "کارهای امروز",
        category: "hero",
        usage: "!tasks",
    };
    const LOCK: CommandMeta = CommandMeta {
        name: "lock",
        desc: "قفل",
        category: "parents",
        usage: "!lock",
    };

    #[test]
    fn groups_by_category() {
        let text = grouped_help_description(&[&TASKS, &LOCK]);
        assert_eq!(text, "**قهرمان**\n`tasks`: کارهای امروز\n\n**والدین**\n`lock`: قفل");
    }

    #[test]
    fn empty_list() {
        assert_eq!(grouped_help_description(&[]), "دستوری پیدا نشد.");
    }

    #[test]
    fn unknown_category_lists_valid_ones() {
        let text = unknown_category_message("@x", &["hero", "parents"]);
        assert!(text.contains("@\u{200B}x"));
        assert!(text.contains("`hero` (قهرمان)"));
    }
}
