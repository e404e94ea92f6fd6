//! Renderer-facing option object.
//!
//! The external renderer reads a single camelCase object at page load.
//! [`RendererOptions`] borrows from [`SiteConfig`] and serializes to exactly
//! that shape.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{RoutingMode, SearchPaths, SiteConfig};

/// Options consumed by the renderer at initialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererOptions<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo: Option<&'a str>,
    homepage: &'a str,
    name_link: &'a str,
    load_sidebar: bool,
    load_navbar: bool,
    coverpage: bool,
    only_cover: bool,
    #[serde(rename = "auto2top")]
    auto_to_top: bool,
    max_level: u8,
    sub_max_level: u8,
    sidebar_display_level: u8,
    hide_sidebar: bool,
    not_found_page: bool,
    router_mode: RoutingMode,
    base_path: &'a str,
    relative_path: bool,
    /// Pattern to replacement, in declaration order.
    alias: Map<String, Value>,
    search: SearchOptions<'a>,
    copy_code: CopyCodeOptions<'a>,
    pagination: PaginationOptions<'a>,
    count: CountOptions<'a>,
    prism: PrismOptions<'a>,
    external_link_target: &'a str,
    external_link_rel: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOptions<'a> {
    max_age: u64,
    paths: &'a SearchPaths,
    placeholder: &'a str,
    no_data: &'a str,
    depth: u8,
    hide_other_sidebar_content: bool,
    path_namespaces: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CopyCodeOptions<'a> {
    button_text: &'a str,
    error_text: &'a str,
    success_text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaginationOptions<'a> {
    previous_text: &'a str,
    next_text: &'a str,
    cross_chapter: bool,
    cross_chapter_text: bool,
}

#[derive(Debug, Serialize)]
struct CountOptions<'a> {
    countable: bool,
    fontsize: &'a str,
    color: &'a str,
    language: &'a str,
}

#[derive(Debug, Serialize)]
struct PrismOptions<'a> {
    theme: &'a str,
}

impl<'a> RendererOptions<'a> {
    pub(crate) fn new(config: &'a SiteConfig) -> Self {
        let alias = config
            .aliases
            .iter()
            .map(|rule| (rule.pattern.clone(), Value::String(rule.replacement.clone())))
            .collect();

        Self {
            name: &config.site.name,
            repo: config.site.repo.as_deref(),
            homepage: &config.site.homepage,
            name_link: &config.site.name_link,
            load_sidebar: config.layout.load_sidebar,
            load_navbar: config.layout.load_navbar,
            coverpage: config.layout.coverpage,
            only_cover: config.layout.only_cover,
            auto_to_top: config.layout.auto_to_top,
            max_level: config.layout.max_level,
            sub_max_level: config.layout.sub_max_level,
            sidebar_display_level: config.layout.sidebar_display_level,
            hide_sidebar: config.layout.hide_sidebar,
            not_found_page: config.layout.not_found_page,
            router_mode: config.routing.mode,
            base_path: &config.routing.base_path,
            relative_path: config.routing.relative_path,
            alias,
            search: SearchOptions {
                max_age: config.search.max_age_ms,
                paths: &config.search.paths,
                placeholder: &config.search.placeholder,
                no_data: &config.search.no_data,
                depth: config.search.depth,
                hide_other_sidebar_content: config.search.hide_other_sidebar_content,
                path_namespaces: &config.search.path_namespaces,
                namespace: config.search.namespace.as_deref(),
            },
            copy_code: CopyCodeOptions {
                button_text: &config.copy_code.button_text,
                error_text: &config.copy_code.error_text,
                success_text: &config.copy_code.success_text,
            },
            pagination: PaginationOptions {
                previous_text: &config.pagination.previous_text,
                next_text: &config.pagination.next_text,
                cross_chapter: config.pagination.cross_chapter,
                cross_chapter_text: config.pagination.cross_chapter_text,
            },
            count: CountOptions {
                countable: config.count.countable,
                fontsize: &config.count.font_size,
                color: &config.count.color,
                language: &config.count.language,
            },
            prism: PrismOptions {
                theme: &config.highlight.theme,
            },
            external_link_target: &config.external_links.target,
            external_link_rel: &config.external_links.rel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_paths::AliasRule;

    #[test]
    fn test_renderer_options_keys() {
        let config = SiteConfig::default();
        let json = serde_json::to_value(config.renderer_options()).unwrap();

        assert_eq!(json["name"], "Documentation");
        assert_eq!(json["routerMode"], "hash");
        assert_eq!(json["auto2top"], true);
        assert_eq!(json["maxLevel"], 4);
        assert_eq!(json["subMaxLevel"], 3);
        assert_eq!(json["notFoundPage"], true);
        assert_eq!(json["externalLinkTarget"], "_blank");
        assert_eq!(json["externalLinkRel"], "noopener");
        assert_eq!(json["search"]["maxAge"], 86_400_000);
        assert_eq!(json["search"]["paths"], "auto");
        assert_eq!(json["search"]["noData"], "No results");
        assert_eq!(json["copyCode"]["successText"], "Copied");
        assert_eq!(json["pagination"]["crossChapterText"], true);
        assert_eq!(json["count"]["fontsize"], "0.9em");
        assert_eq!(json["prism"]["theme"], "default");
        assert!(json.get("repo").is_none());
        assert!(json["search"].get("namespace").is_none());
    }

    #[test]
    fn test_renderer_options_alias_order() {
        let config = SiteConfig {
            aliases: vec![
                AliasRule::new("/z/(.*)", "/zz/$1"),
                AliasRule::new("/a/(.*)", "/aa/$1"),
            ],
            ..Default::default()
        };
        let json = serde_json::to_value(config.renderer_options()).unwrap();

        let keys: Vec<&str> = json["alias"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["/z/(.*)", "/a/(.*)"]);
        assert_eq!(json["alias"]["/a/(.*)"], "/aa/$1");
    }

    #[test]
    fn test_renderer_options_history_mode() {
        let mut config = SiteConfig::default();
        config.routing.mode = RoutingMode::History;
        config.search.paths = SearchPaths::List(vec!["/guide".to_owned()]);
        let json = serde_json::to_value(config.renderer_options()).unwrap();

        assert_eq!(json["routerMode"], "history");
        assert_eq!(json["search"]["paths"][0], "/guide");
    }
}
