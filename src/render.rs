//! HTML for the listing and post pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated value is
//! escaped. Dates go through [`format_publication_date`] only.

use maud::{html, Markup, DOCTYPE};
use urlencoding::encode;

use crate::{
    config::locale::DateLocale,
    post::{
        date::format_publication_date, page_file_name, DetailState, PostDetail, PostPage,
        PostSummary,
    },
};

const SITE_TITLE: &str = "spacetraveling";

fn base_document(title: &str, root: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_TITLE) }
            }
            body {
                header.site-header {
                    a href={ (root) "index.html" } { (SITE_TITLE) }
                }
                (content)
            }
        }
    }
}

fn post_card(post: &PostSummary, locale: DateLocale) -> Markup {
    html! {
        // File names are already percent-encoded, the server decodes the path once.
        a.post-card href={ "post/" (encode(&page_file_name(&post.id))) } {
            h2 { (post.title) }
            p { (post.subtitle) }
            footer {
                time.date { (format_publication_date(post.published_at.as_ref(), locale)) }
                span.author { (post.author) }
            }
        }
    }
}

/// The home page with every summary loaded so far.
///
/// The page is static, so posts behind an unused cursor are not offered.
pub fn render_listing(page: &PostPage, locale: DateLocale) -> Markup {
    let content = html! {
        main.listing {
            @for post in &page.items {
                (post_card(post, locale))
            }
        }
    };

    base_document("Posts", "", content)
}

fn render_post(post: &PostDetail, locale: DateLocale) -> Markup {
    let summary = &post.summary;
    let content = html! {
        @if !post.banner.url.is_empty() {
            div.banner {
                img src=(post.banner.url) alt=(post.banner.alt);
            }
        }
        main.post {
            header {
                h1 { (summary.title) }
                p {
                    time.date { (format_publication_date(summary.published_at.as_ref(), locale)) }
                    span.author { (summary.author) }
                    span.reading-time { (post.reading_time_minutes()) " min" }
                }
            }
            @for section in &post.content {
                section.content {
                    h2 { (section.heading) }
                    @for paragraph in &section.paragraphs {
                        p { (paragraph) }
                    }
                }
            }
        }
    };

    base_document(&summary.title, "../", content)
}

/// A post page for whichever state its path is in.
pub fn render_detail(state: &DetailState, locale: DateLocale) -> Markup {
    match state {
        DetailState::Ready(post) => render_post(post, locale),
        DetailState::Loading => base_document(
            "Carregando",
            "../",
            html! { main.post { p { "Carregando..." } } },
        ),
        DetailState::NotFound => base_document(
            "Post não encontrado",
            "../",
            html! { main.post { h1 { "Post não encontrado" } } },
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Locale, TimeZone, Utc};

    use crate::post::{Banner, ContentSection, IdKind};

    use super::*;

    fn summary(id: &str) -> PostSummary {
        PostSummary {
            id: id.to_string(),
            id_kind: IdKind::Uid,
            published_at: Some(Utc.with_ymd_and_hms(2021, 3, 25, 19, 25, 28).unwrap()),
            title: format!("Title {}", id),
            subtitle: "Sub <b>".to_string(),
            author: "Joseph".to_string(),
        }
    }

    #[test]
    fn listing_links_every_post_and_formats_dates() {
        let page = PostPage {
            items: vec![summary("a"), summary("b")],
            next_page_cursor: None,
        };
        let html = render_listing(&page, Locale::en_US.into()).into_string();

        assert!(html.contains(r#"href="post/a.html""#));
        assert!(html.contains(r#"href="post/b.html""#));
        assert!(html.contains("25 Mar 2021"));
        assert!(html.contains("Sub &lt;b&gt;"));
        assert!(!html.contains("load-more"));
    }

    #[test]
    fn listing_has_no_dead_controls_while_a_cursor_remains() {
        let page = PostPage {
            items: vec![summary("a")],
            next_page_cursor: Some("https://next?page=2&x=1".to_string()),
        };
        let html = render_listing(&page, DateLocale::default()).into_string();
        assert!(html.contains(r#"href="post/a.html""#));
        assert!(!html.contains("Carregar mais posts"));
        assert!(!html.contains("data-next"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn links_match_the_written_file_names() {
        let page = PostPage {
            items: vec![summary("a.b"), summary("a_b"), summary("../x")],
            next_page_cursor: None,
        };
        let html = render_listing(&page, DateLocale::default()).into_string();

        assert!(html.contains(r#"href="post/a.b.html""#));
        assert!(html.contains(r#"href="post/a_b.html""#));
        assert!(html.contains(r#"href="post/..%252Fx.html""#));
    }

    #[test]
    fn post_shows_reading_time_and_sections() {
        let post = PostDetail {
            summary: summary("a"),
            banner: Banner {
                url: "https://images.prismic.io/a.png".to_string(),
                alt: "banner a".to_string(),
            },
            content: vec![ContentSection {
                heading: "Intro".to_string(),
                paragraphs: vec!["one two three".to_string(), "four".to_string()],
            }],
        };
        let html = render_detail(&DetailState::Ready(post), DateLocale::default()).into_string();

        assert!(html.contains("1 min"));
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(html.contains("<p>one two three</p><p>four</p>"));
        assert!(html.contains(r#"src="https://images.prismic.io/a.png""#));
        assert!(html.contains("25 mar 2021"));
    }

    #[test]
    fn loading_and_not_found_pages() {
        let loading = render_detail(&DetailState::Loading, DateLocale::default()).into_string();
        assert!(loading.contains("Carregando..."));

        let missing = render_detail(&DetailState::NotFound, DateLocale::default()).into_string();
        assert!(missing.contains("Post não encontrado"));
    }
}
