use crate::models::{Product, ProductStatus};
use chrono::{DateTime, Datelike, Duration, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Products created within this window count as "recent".
pub const RECENT_WINDOW_DAYS: i64 = 7;
/// Daily trend window.
pub const DAILY_WINDOW_DAYS: i64 = 30;
/// Location/color breakdowns keep this many groups.
pub const GROUP_LIMIT: usize = 5;
/// Monthly trend keeps this many buckets.
pub const MONTHLY_LIMIT: usize = 6;
/// Activity feed length.
pub const ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_products: i64,
    pub available_products: i64,
    pub sold_products: i64,
    pub recent_products: i64,
    pub total_value: f64,
    pub available_value: f64,
    pub average_price: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GroupCount {
    #[serde(rename = "_id")]
    pub key: String,
    pub count: i64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub month: String, // "{year}-{month}", no zero padding
    pub count: i64,
    pub total_value: f64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    pub date: String, // ISO YYYY-MM-DD
    pub count: i64,
    pub total_value: f64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Percentages {
    pub available_percentage: i64,
    pub sold_percentage: i64,
    pub growth_rate: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub products_by_location: Vec<GroupCount>,
    pub top_colors: Vec<GroupCount>,
    pub monthly_trend: Vec<MonthlyBucket>,
    pub daily_stats: Vec<DailyBucket>,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub analytics: Analytics,
    pub percentages: Percentages,
}

#[derive(Debug, Serialize)]
pub struct ActivityMeta {
    pub price: f64,
    pub status: ProductStatus,
}

#[derive(Debug, Serialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: ProductStatus,
    pub date: DateTime<Utc>,
    pub meta: ActivityMeta,
}

/// Point-in-time totals over a product snapshot. `now` is injected so the
/// recent-window count stays deterministic under test.
pub fn compute_summary(products: &[Product], now: DateTime<Utc>) -> Summary {
    let total_products = products.len() as i64;
    let available_products = products
        .iter()
        .filter(|p| p.status == ProductStatus::Available)
        .count() as i64;
    let sold_products = products
        .iter()
        .filter(|p| p.status == ProductStatus::Sold)
        .count() as i64;

    let total_value: f64 = products.iter().map(|p| p.price).sum();
    let available_value: f64 = products
        .iter()
        .filter(|p| p.status == ProductStatus::Available)
        .map(|p| p.price)
        .sum();

    // Guard the empty snapshot: the mean must be 0, not NaN.
    let average_price = if total_products > 0 {
        total_value / total_products as f64
    } else {
        0.0
    };

    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let recent_products = products.iter().filter(|p| p.created_at >= cutoff).count() as i64;

    Summary {
        total_products,
        available_products,
        sold_products,
        recent_products,
        total_value,
        available_value,
        average_price,
    }
}

/// Count occurrences of a key, sort descending by count and keep the top
/// `limit` groups. Ties keep first-encountered order (stable sort over
/// insertion order). Records where `key` yields None are skipped.
pub fn group_by<'a, F>(products: &'a [Product], key: F, limit: usize) -> Vec<GroupCount>
where
    F: Fn(&'a Product) -> Option<&'a str>,
{
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for product in products {
        if let Some(key) = key(product) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key: key.to_string(),
            count,
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(limit);
    groups
}

pub fn products_by_location(products: &[Product], limit: usize) -> Vec<GroupCount> {
    // location is required on every record, nothing to filter
    group_by(products, |p| Some(p.location.as_str()), limit)
}

pub fn top_colors(products: &[Product], limit: usize) -> Vec<GroupCount> {
    group_by(
        products,
        |p| {
            if p.color.is_empty() {
                None
            } else {
                Some(p.color.as_str())
            }
        },
        limit,
    )
}

/// Bucket by (year, month) of creation, newest period first, keeping
/// `limit` buckets.
pub fn monthly_trend(products: &[Product], limit: usize) -> Vec<MonthlyBucket> {
    let mut buckets: IndexMap<(i32, u32), (i64, f64)> = IndexMap::new();
    for product in products {
        let period = (product.created_at.year(), product.created_at.month());
        let bucket = buckets.entry(period).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += product.price;
    }

    let mut periods: Vec<((i32, u32), (i64, f64))> = buckets.into_iter().collect();
    periods.sort_by(|a, b| b.0.cmp(&a.0));
    periods.truncate(limit);

    periods
        .into_iter()
        .map(|((year, month), (count, total_value))| MonthlyBucket {
            month: format!("{}-{}", year, month),
            count,
            total_value,
        })
        .collect()
}

/// Bucket records created within the last `window_days` by calendar date,
/// ascending.
pub fn daily_trend(products: &[Product], window_days: i64, now: DateTime<Utc>) -> Vec<DailyBucket> {
    let cutoff = now - Duration::days(window_days);

    // ISO dates sort lexicographically in chronological order
    let mut buckets: BTreeMap<String, (i64, f64)> = BTreeMap::new();
    for product in products.iter().filter(|p| p.created_at >= cutoff) {
        let date = product.created_at.format("%Y-%m-%d").to_string();
        let bucket = buckets.entry(date).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += product.price;
    }

    buckets
        .into_iter()
        .map(|(date, (count, total_value))| DailyBucket {
            date,
            count,
            total_value,
        })
        .collect()
}

pub fn percentages(summary: &Summary) -> Percentages {
    fn pct(part: i64, total: i64) -> i64 {
        if total > 0 {
            (100.0 * part as f64 / total as f64).round() as i64
        } else {
            0
        }
    }

    Percentages {
        available_percentage: pct(summary.available_products, summary.total_products),
        sold_percentage: pct(summary.sold_products, summary.total_products),
        growth_rate: pct(summary.recent_products, summary.total_products),
    }
}

/// The `limit` most recently created products rendered as feed entries.
pub fn recent_activity(products: &[Product], limit: usize) -> Vec<Activity> {
    let mut recent: Vec<&Product> = products.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);

    recent
        .into_iter()
        .map(|product| Activity {
            kind: "product_added".to_string(),
            title: format!("Product Added: {}", product.name),
            description: format!("Added new product for ${}", product.price),
            status: product.status,
            date: product.created_at,
            meta: ActivityMeta {
                price: product.price,
                status: product.status,
            },
        })
        .collect()
}

/// Full dashboard payload over one snapshot.
pub fn dashboard(products: &[Product], now: DateTime<Utc>) -> Dashboard {
    let summary = compute_summary(products, now);
    let percentages = percentages(&summary);

    Dashboard {
        analytics: Analytics {
            products_by_location: products_by_location(products, GROUP_LIMIT),
            top_colors: top_colors(products, GROUP_LIMIT),
            monthly_trend: monthly_trend(products, MONTHLY_LIMIT),
            daily_stats: daily_trend(products, DAILY_WINDOW_DAYS, now),
        },
        summary,
        percentages,
    }
}
