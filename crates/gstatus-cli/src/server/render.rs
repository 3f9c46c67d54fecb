//! HTML pages for each kind of view.

use std::fmt::Write as _;

use gstatus_core::{CommitPage, DiffSet, QueryError, View, escape_html};

use crate::output::short_id;

/// Render a full HTML document for `view`.
#[must_use]
pub fn page(view: &View) -> String {
    match view {
        View::Commits(page) => layout(&format!("History - page {}", page.page), &commits(page)),
        View::Diffs(set) => layout(
            &format!("{}..{}", short_id(&set.old), short_id(&set.new)),
            &diffs(set),
        ),
        View::Error(err) => layout("Error", &error(err)),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - gstatus</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n\
         <body>\n<header><a href=\"/\">gstatus</a></header>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn commits(page: &CommitPage) -> String {
    let mut html = String::new();

    if page.commits.is_empty() {
        html.push_str("<p class=\"empty\">No commits on this page.</p>\n");
    } else {
        html.push_str(
            "<table class=\"commits\">\n<tr><th>Commit</th><th>Author</th><th>Date</th><th>Message</th><th></th></tr>\n",
        );
        for commit in &page.commits {
            let record = &commit.record;
            let id = escape_html(&record.id);
            let diff_link = commit.previous_id.as_deref().map_or_else(String::new, |prev| {
                format!("<a href=\"/commit/{}/{id}\">diff</a>", escape_html(prev))
            });
            let _ = writeln!(
                html,
                "<tr><td class=\"id\" title=\"{id}\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{diff_link}</td></tr>",
                escape_html(short_id(&record.id)),
                escape_html(&record.author),
                escape_html(&record.date),
                escape_html(&record.message),
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str("<nav>");
    if page.page > 0 {
        let _ = write!(html, "<a href=\"/page/{}\">&larr; Newer</a> ", page.page - 1);
    }
    if page.has_older {
        let _ = write!(html, "<a href=\"/page/{}\">Older &rarr;</a>", page.page + 1);
    }
    html.push_str("</nav>\n");

    html
}

fn diffs(set: &DiffSet) -> String {
    let mut html = format!(
        "<h1>{} &rarr; {}</h1>\n",
        escape_html(short_id(&set.old)),
        escape_html(short_id(&set.new))
    );

    if set.diffs.is_empty() {
        html.push_str("<p class=\"empty\">No changes.</p>\n");
    }
    for diff in &set.diffs {
        // Bodies are already markup from the highlighter.
        let _ = write!(
            html,
            "<section class=\"file\">\n<h2>{}</h2>\n{}</section>\n",
            escape_html(&diff.path),
            diff.body
        );
    }

    html
}

fn error(err: &QueryError) -> String {
    format!(
        "<div class=\"error\"><pre>{}</pre></div>\n",
        escape_html(&err.error_msg)
    )
}
