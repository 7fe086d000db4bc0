use crate::config::config;
use crate::types::error::AppError;
use crate::types::resource::PaginationResult;

/// Calculates pagination details for a retrieval and renders the
/// RFC 5988 `Link` header.
#[derive(Debug)]
pub struct PaginationGenerator {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PaginationGenerator {
    pub fn new(page_size: u64, page: u64, total_items: u64) -> Self {
        PaginationGenerator {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size.max(1)),
        }
    }

    pub fn validate_page(&self) -> Result<(), AppError> {
        // An empty result set still counts as one valid page.
        let max_page = self.total_pages.max(1);
        if self.page < 1 || self.page > max_page {
            return Err(AppError::InvalidPage { max_page });
        }
        Ok(())
    }

    pub fn validate_page_size(&self) -> Result<(), AppError> {
        let max_page_size = config().max_page_size;
        if self.page_size < 1 || self.page_size > max_page_size {
            return Err(AppError::InvalidPageSize { max_page_size });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.validate_page()?;
        self.validate_page_size()
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    /// Build the `Link` header value for the request URI: `first` and
    /// `last` always, `next` and `prev` when they exist.
    pub fn link_header(&self, request_uri: &str) -> String {
        let mut links = vec![
            Link::new(request_uri, 1, "first"),
            Link::new(request_uri, self.total_pages.max(1), "last"),
        ];
        if self.page < self.total_pages {
            links.push(Link::new(request_uri, self.page + 1, "next"));
        }
        if self.page > 1 {
            links.push(Link::new(request_uri, self.page - 1, "prev"));
        }
        links
            .iter()
            .map(Link::render)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn result(&self) -> PaginationResult {
        PaginationResult {
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// One pagination link: a URL with its `page` parameter replaced.
struct Link {
    url: String,
    rel: &'static str,
}

impl Link {
    fn new(request_uri: &str, page: u64, rel: &'static str) -> Self {
        let (path, query) = match request_uri.split_once('?') {
            Some((path, query)) => (path, query),
            None => (request_uri, ""),
        };
        let mut params: Vec<String> = query
            .split('&')
            .filter(|param| !param.is_empty() && !param.starts_with("page="))
            .map(str::to_string)
            .collect();
        params.push(format!("page={page}"));
        Link {
            url: format!("{path}?{}", params.join("&")),
            rel,
        }
    }

    fn render(&self) -> String {
        format!("<{}>; rel=\"{}\"", self.url, self.rel)
    }
}
