//! HTML rendering for the ledger pages.
//!
//! Plain server-side markup; every piece of user-supplied text passes
//! through [`escape`].

use std::fmt::Write;

use oilmill_core::{BatchRow, OilType, Product, ProductOption, ProductProduction, SaleRow, Summary};

use crate::flash::Flash;

/// Escapes text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body with navigation and the pending flash, if any.
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                f.level.as_str(),
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} · Oilmill Ledger</title></head>
<body>
<nav><a href="/">Dashboard</a> | <a href="/products">Products</a> | <a href="/batches">Batches</a> | <a href="/sales">Sales</a></nav>
{flash_html}
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn dashboard(summary: &Summary, production: &[ProductProduction]) -> String {
    let mut body = format!(
        r#"<ul class="metrics">
<li>Products: <strong id="products-count">{}</strong></li>
<li>Total produced: <strong id="total-produced">{} L</strong></li>
<li>Total sold: <strong id="total-sold">{} L</strong></li>
</ul>
<h2>Produced by product</h2>
<table><tr><th>Product</th><th>Oil type</th><th>Produced (L)</th></tr>
"#,
        summary.product_count, summary.total_produced_liters, summary.total_sold_liters
    );

    for row in production {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.name),
            row.oil_type,
            row.produced_liters
        );
    }
    body.push_str("</table>\n");
    body
}

pub fn products_page(products: &[Product]) -> String {
    let mut body = String::from(
        r#"<form method="post" action="/products">
<input name="name" placeholder="Name" required>
<select name="oil_type">
"#,
    );
    for oil in OilType::ALL {
        let _ = writeln!(body, r#"<option value="{oil}">{oil}</option>"#);
    }
    body.push_str(
        r#"</select>
<button type="submit">Add product</button>
</form>
<table><tr><th>ID</th><th>Name</th><th>Oil type</th><th></th></tr>
"#,
    );

    for p in products {
        let _ = writeln!(
            body,
            r#"<tr><td>{id}</td><td>{name}</td><td>{oil}</td><td><form method="post" action="/products/{id}/delete"><button type="submit">Delete</button></form></td></tr>"#,
            id = p.id,
            name = escape(&p.name),
            oil = p.oil_type,
        );
    }
    body.push_str("</table>\n");
    body
}

fn product_select(options: &[ProductOption]) -> String {
    let mut html = String::from("<select name=\"product_id\" required>\n");
    for o in options {
        let _ = writeln!(html, r#"<option value="{}">{}</option>"#, o.id, escape(&o.name));
    }
    html.push_str("</select>\n");
    html
}

pub fn batches_page(rows: &[BatchRow], options: &[ProductOption]) -> String {
    let mut body = format!(
        r#"<form method="post" action="/batches">
{}<input type="date" name="batch_date">
<input name="quantity_liters" placeholder="Quantity (L)" required>
<input name="cost_per_liter" placeholder="Cost per liter" required>
<button type="submit">Record batch</button>
</form>
<table><tr><th>ID</th><th>Product</th><th>Oil type</th><th>Date</th><th>Quantity (L)</th><th>Cost/L</th></tr>
"#,
        product_select(options)
    );

    for b in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            b.id,
            escape(&b.product),
            b.oil_type,
            b.batch_date,
            b.quantity_liters,
            b.cost_per_liter
        );
    }
    body.push_str("</table>\n");
    body
}

pub fn sales_page(rows: &[SaleRow], options: &[ProductOption]) -> String {
    let mut body = format!(
        r#"<form method="post" action="/sales">
{}<input type="date" name="sale_date">
<input name="quantity_liters" placeholder="Quantity (L)" required>
<input name="price_per_liter" placeholder="Price per liter" required>
<input name="customer" placeholder="Customer (optional)">
<button type="submit">Record sale</button>
</form>
<table><tr><th>ID</th><th>Product</th><th>Oil type</th><th>Date</th><th>Quantity (L)</th><th>Price/L</th><th>Customer</th></tr>
"#,
        product_select(options)
    );

    for s in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            s.id,
            escape(&s.product),
            s.oil_type,
            s.sale_date,
            s.quantity_liters,
            s.price_per_liter,
            s.customer.as_deref().map(escape).unwrap_or_default()
        );
    }
    body.push_str("</table>\n");
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"A&B's"</b>"#), "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_layout_shows_flash() {
        let html = layout("Sales", Some(&Flash::error("Error: <x>")), "");
        assert!(html.contains(r#"<div class="flash flash-error">Error: &lt;x&gt;</div>"#));
    }

    #[test]
    fn test_products_page_lists_every_oil_type() {
        let html = products_page(&[]);
        for oil in OilType::ALL {
            assert!(html.contains(&format!(r#"<option value="{oil}">"#)));
        }
    }
}
