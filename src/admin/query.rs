//! Query-string handling shared by every admin list and export endpoint.

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{core::app_error::AppError, core::config, slug::escape_like};

const SEARCH: &str = "q";
const ORDERING: &str = "ordering";
const PAGE: &str = "page";
const PAGE_SIZE: &str = "page_size";
const IDS: &str = "ids";
const DATE_RANGE: &str = "date_range";
const PRICE_RANGE: &str = "price_range";

/// Column type of `created_at`-style fields, for `date_field` declarations.
pub type Timestamp = DateTime<Utc>;

/// Parsed list query. Every key that is not reserved is treated as a field filter.
#[derive(Debug, Default)]
pub struct ListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub ids: Option<String>,
    pub date_range: Option<DateRange>,
    pub price_range: Option<PriceRange>,
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    pub fn from_query(raw: HashMap<String, String>) -> Result<Self, AppError> {
        let mut params = ListParams::default();

        for (key, value) in raw {
            match key.as_str() {
                SEARCH => {
                    let term = value.trim();
                    if !term.is_empty() {
                        params.search = Some(term.to_string());
                    }
                }
                ORDERING => params.ordering = Some(value),
                PAGE => params.page = Some(parse_number(PAGE, &value)?),
                PAGE_SIZE => params.page_size = Some(parse_number(PAGE_SIZE, &value)?),
                IDS => params.ids = Some(value),
                DATE_RANGE => params.date_range = Some(value.parse()?),
                PRICE_RANGE => params.price_range = Some(value.parse()?),
                _ => {
                    params.filters.insert(key, value);
                }
            }
        }

        Ok(params)
    }

    /// Rejects filter keys the resource does not declare.
    pub fn check_filters(&self, allowed: &[&str]) -> Result<(), AppError> {
        match self.filters.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(AppError::BadRequest(format!(
                "Unknown filter `{}` (allowed: {})",
                key,
                allowed.join(", ")
            ))),
            None => Ok(()),
        }
    }

    pub fn filter<T: FilterValue>(&self, field: &str) -> Result<Option<T>, AppError> {
        self.filters
            .get(field)
            .map(|raw| parse_value(field, raw))
            .transpose()
    }

    /// `ids=1,2,3`; blank entries are ignored.
    pub fn ids<T: FilterValue>(&self) -> Result<Option<Vec<T>>, AppError> {
        let Some(raw) = self.ids.as_deref() else {
            return Ok(None);
        };
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| parse_value(IDS, part))
            .collect::<Result<Vec<T>, AppError>>()
            .map(Some)
    }

    /// `%term%` with wildcards in the term escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|term| format!("%{}%", escape_like(term)))
    }

    /// Splits `ordering` into the field name and whether it is descending.
    pub fn order(&self) -> Option<(&str, bool)> {
        let raw = self.ordering.as_deref()?.trim();
        match raw.strip_prefix('-') {
            Some(field) => Some((field, true)),
            None => Some((raw, false)),
        }
    }

    pub fn paging(&self, limits: &config::Admin) -> Result<Paging, AppError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".into()));
        }
        let page_size = self
            .page_size
            .unwrap_or(limits.page_size)
            .clamp(1, limits.max_page_size);
        if (page - 1).checked_mul(page_size).is_none() {
            return Err(AppError::BadRequest(format!("page {} is out of range", page)));
        }
        Ok(Paging { page, page_size })
    }
}

fn parse_number(key: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("`{}` must be an integer, got `{}`", key, raw)))
}

fn parse_value<T: FilterValue>(field: &str, raw: &str) -> Result<T, AppError> {
    T::parse_filter(raw.trim()).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid value `{}` for `{}`", raw, field))
    })
}

/// Values that can appear in a `field=value` filter.
pub trait FilterValue: Sized {
    fn parse_filter(raw: &str) -> Option<Self>;
}

impl FilterValue for String {
    fn parse_filter(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FilterValue for bool {
    fn parse_filter(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }
}

impl FilterValue for i32 {
    fn parse_filter(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FilterValue for Uuid {
    fn parse_filter(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok()
    }
}

impl FilterValue for NaiveDate {
    fn parse_filter(raw: &str) -> Option<Self> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

impl FilterValue for Decimal {
    fn parse_filter(raw: &str) -> Option<Self> {
        Decimal::from_str(raw).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Week,
    Month,
    Year,
}

impl FromStr for DateRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "year" => Ok(DateRange::Year),
            other => Err(AppError::BadRequest(format!(
                "Invalid date_range `{}` (expected today, week, month or year)",
                other
            ))),
        }
    }
}

impl DateRange {
    fn lookback(self) -> Duration {
        match self {
            DateRange::Today => Duration::zero(),
            DateRange::Week => Duration::days(7),
            DateRange::Month => Duration::days(30),
            DateRange::Year => Duration::days(365),
        }
    }
}

/// Lower bound of a [`DateRange`] in the column's own type.
pub trait RangeBound: Sized {
    fn since(range: DateRange, now: DateTime<Utc>) -> Self;
}

impl RangeBound for DateTime<Utc> {
    fn since(range: DateRange, now: DateTime<Utc>) -> Self {
        match range {
            DateRange::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc())
                .unwrap_or(now),
            other => now - other.lookback(),
        }
    }
}

impl RangeBound for NaiveDate {
    fn since(range: DateRange, now: DateTime<Utc>) -> Self {
        now.date_naive() - range.lookback()
    }
}

/// `lo-hi` (half open) or `lo+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl FromStr for PriceRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::BadRequest(format!(
                "Invalid price_range `{}` (expected e.g. 100-500 or 1000+)",
                s
            ))
        };
        let number = |raw: &str| Decimal::from_str(raw.trim()).map_err(|_| invalid());

        if let Some(min) = s.strip_suffix('+') {
            return Ok(PriceRange {
                min: number(min)?,
                max: None,
            });
        }

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let (min, max) = (number(min)?, number(max)?);
        if max <= min {
            return Err(invalid());
        }
        Ok(PriceRange {
            min,
            max: Some(max),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: i64,
    pub page_size: i64,
}

impl Paging {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

#[derive(Serialize, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub num_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, paging: Paging) -> Self {
        let num_pages = ((total + paging.page_size - 1) / paging.page_size).max(1);
        Page {
            items,
            total,
            page: paging.page,
            page_size: paging.page_size,
            num_pages,
        }
    }
}

/// Body of a bulk action request.
#[derive(Deserialize, Debug)]
pub struct ActionRequest<I> {
    pub ids: Vec<I>,
}

/// Body of a link replacement: the full set of related ids.
#[derive(Deserialize, Debug)]
pub struct RelationRequest<I> {
    pub ids: Vec<I>,
}

impl<I: Ord + Copy> RelationRequest<I> {
    /// Requested ids, sorted and without repeats.
    pub fn targets(&self) -> Vec<I> {
        let mut ids = self.ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reserved_keys_are_not_filters() {
        let params = ListParams::from_query(query(&[
            ("q", " maize "),
            ("ordering", "-price_per_unit"),
            ("page", "2"),
            ("status", "active"),
        ]))
        .unwrap();

        assert_eq!(params.search.as_deref(), Some("maize"));
        assert_eq!(params.order(), Some(("price_per_unit", true)));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.filters.len(), 1);
        assert!(params.check_filters(&["status"]).is_ok());
    }

    #[test]
    fn unknown_filters_are_rejected() {
        let params = ListParams::from_query(query(&[("colour", "green")])).unwrap();
        let err = params.check_filters(&["status", "featured"]).unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn typed_filters_parse_or_fail_with_400() {
        let params =
            ListParams::from_query(query(&[("is_verified", "1"), ("county_id", "x")])).unwrap();
        assert_eq!(params.filter::<bool>("is_verified").unwrap(), Some(true));
        assert!(matches!(
            params.filter::<i32>("county_id"),
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(params.filter::<i32>("missing").unwrap(), None);
    }

    #[test]
    fn ids_are_comma_separated() {
        let params = ListParams::from_query(query(&[("ids", "3, 5,,8")])).unwrap();
        assert_eq!(params.ids::<i32>().unwrap(), Some(vec![3, 5, 8]));
    }

    #[test]
    fn search_pattern_escapes_wildcards() {
        let params = ListParams::from_query(query(&[("q", "50%_off")])).unwrap();
        assert_eq!(params.search_pattern().as_deref(), Some("%50\\%\\_off%"));

        let blank = ListParams::from_query(query(&[("q", "   ")])).unwrap();
        assert_eq!(blank.search_pattern(), None);
    }

    #[test]
    fn paging_uses_defaults_and_caps_page_size() {
        let limits = config::Admin::default();

        let params = ListParams::from_query(query(&[])).unwrap();
        assert_eq!(
            params.paging(&limits).unwrap(),
            Paging {
                page: 1,
                page_size: 100
            }
        );

        let params = ListParams::from_query(query(&[("page", "3"), ("page_size", "10000")])).unwrap();
        let paging = params.paging(&limits).unwrap();
        assert_eq!(paging.page_size, 500);
        assert_eq!(paging.offset(), 1000);

        let params = ListParams::from_query(query(&[("page", "0")])).unwrap();
        assert!(params.paging(&limits).is_err());
    }

    #[test]
    fn huge_pages_are_rejected_instead_of_overflowing() {
        let limits = config::Admin::default();
        let max = i64::MAX.to_string();

        let params = ListParams::from_query(query(&[("page", max.as_str())])).unwrap();
        let err = params.paging(&limits).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("out of range"));

        let paging = Paging {
            page: i64::MAX,
            page_size: 100,
        };
        assert_eq!(paging.offset(), i64::MAX);
    }

    #[test]
    fn page_counts_round_up() {
        let paging = Paging {
            page: 1,
            page_size: 100,
        };
        assert_eq!(Page::new(Vec::<i32>::new(), 0, paging).num_pages, 1);
        assert_eq!(Page::new(Vec::<i32>::new(), 100, paging).num_pages, 1);
        assert_eq!(Page::new(Vec::<i32>::new(), 101, paging).num_pages, 2);
    }

    #[test]
    fn price_ranges_match_admin_buckets() {
        let bucket: PriceRange = "100-500".parse().unwrap();
        assert_eq!(bucket.min, Decimal::from(100));
        assert_eq!(bucket.max, Some(Decimal::from(500)));

        let open: PriceRange = "1000+".parse().unwrap();
        assert_eq!(open.max, None);

        assert!("500-100".parse::<PriceRange>().is_err());
        assert!("cheap".parse::<PriceRange>().is_err());
    }

    #[test]
    fn date_ranges_start_at_expected_bounds() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 45, 0).unwrap();

        let today = <DateTime<Utc> as RangeBound>::since(DateRange::Today, now);
        assert_eq!(today, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());

        let week = <DateTime<Utc> as RangeBound>::since(DateRange::Week, now);
        assert_eq!(week, Utc.with_ymd_and_hms(2024, 3, 8, 13, 45, 0).unwrap());

        let month = <NaiveDate as RangeBound>::since(DateRange::Month, now);
        assert_eq!(month, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());

        assert!("decade".parse::<DateRange>().is_err());
    }

    #[test]
    fn relation_targets_are_sorted_and_distinct() {
        let body: RelationRequest<i32> = serde_json::from_str(r#"{"ids": [12, 3, 12, 7, 3]}"#).unwrap();
        assert_eq!(body.targets(), vec![3, 7, 12]);

        let empty: RelationRequest<i32> = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(empty.targets().is_empty());
    }
}
