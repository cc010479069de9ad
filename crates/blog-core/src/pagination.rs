//! Paging and sorting for list queries.
//!
//! Requests follow the `page`/`size`/`sort` conventions clients already use:
//! pages are 0-based and `sort` reads `<property>[,asc|desc]`.

use crate::error::DomainError;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Largest row offset a page may start at; SQL binds offsets as `BIGINT`.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A property an entity can be ordered by.
pub trait SortField: Copy + Send + Sync + 'static {
    /// Resolve a wire property name.
    fn from_property(name: &str) -> Option<Self>;

    /// The wire property name.
    fn property(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub direction: Direction,
}

impl<F: SortField> Sort<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }

    /// Parse `"<property>"` or `"<property>,<asc|desc>"`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();

        let field = F::from_property(property).ok_or_else(|| {
            DomainError::invalid(format!("sort: propriedade desconhecida '{property}'"))
        })?;

        let direction = match parts.next() {
            None | Some("") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(d) => {
                return Err(DomainError::invalid(format!(
                    "sort: direção inválida '{d}'"
                )));
            }
        };

        if parts.next().is_some() {
            return Err(DomainError::invalid(format!("sort: formato inválido '{raw}'")));
        }

        Ok(Self { field, direction })
    }
}

/// A normalised page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<F> {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort<F>>,
}

impl<F: SortField> PageRequest<F> {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: Sort<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// Bounds applied when turning raw query parameters into a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Missing page → 0, missing or zero size → default, oversize → clamped.
    /// A page whose offset does not fit in `BIGINT` is rejected.
    pub fn request<F: SortField>(
        &self,
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
    ) -> Result<PageRequest<F>, DomainError> {
        let size = match size {
            None | Some(0) => self.default_size,
            Some(s) => s.min(self.max_size),
        }
        .max(1);

        let page = page.unwrap_or(0);
        if page.checked_mul(size).is_none_or(|offset| offset > MAX_OFFSET) {
            return Err(DomainError::invalid(format!(
                "page: fora do intervalo permitido '{page}'"
            )));
        }

        let sort = match sort.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Sort::parse(raw)?),
        };

        Ok(PageRequest { page, size, sort })
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of rows across all pages.
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        Self {
            items,
            total,
            page,
            size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size)
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
