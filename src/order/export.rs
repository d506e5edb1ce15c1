//! Order export - email draft rendering and mailto assembly
//!
//! The export is a plain-text purchase request in the house format: client
//! block, one entry per line item, per-currency summary. The exact wording
//! matters to the sales team's inbox filters, so it is pinned by tests.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::Order;

/// Client/session details rendered into the draft.
#[derive(Debug, Clone, Copy)]
pub struct ExportInfo<'a> {
    pub project_name: &'a str,
    pub city: &'a str,
    pub phone: &'a str,
    /// Human label of the sell column in use
    pub price_list: &'a str,
}

/// Email subject line for the order.
pub fn render_subject(info: &ExportInfo) -> String {
    format!("Pedido: {} ({})", info.project_name, info.city)
}

/// Plain-text email body.
pub fn render_body(order: &Order, info: &ExportInfo) -> String {
    let mut body = String::new();
    body.push_str("SOLICITUD DE COMPRA / COTIZACIÓN\n\n");
    body.push_str("DATOS DEL CLIENTE:\n");
    body.push_str(&format!("Proyecto: {}\n", info.project_name));
    body.push_str(&format!("Ciudad: {}\n", info.city));
    body.push_str(&format!("Celular: {}\n", info.phone));
    body.push_str(&format!("Lista de Precios Usada: {}\n", info.price_list));
    body.push_str("\nDETALLE DEL PEDIDO:\n");

    for item in order.items() {
        body.push_str(&format!(
            "\n- ({}) {}\n  {}\n  Precio Venta: ${:.2} {}\n",
            item.quantity, item.model, item.description, item.line_sell, item.currency
        ));
    }

    body.push_str("\nRESUMEN ECONÓMICO:\n");
    for (currency, totals) in order.totals_by_currency() {
        body.push_str(&format!("Total Venta ({}): ${:.2}\n", currency, totals.sell));
    }
    body
}

/// Assemble a `mailto:` URL with percent-encoded subject and body.
pub fn mailto_url(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(subject, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::LineItem;
    use crate::pricing::PriceBreakdown;

    fn sample_order() -> Order {
        let mut order = Order::default();
        let breakdown = PriceBreakdown::compute(1800.0, 1260.0, 2);
        order.add(LineItem::new(
            "MC-18",
            "EXTRACTOR MULTICURVA 18. INCLUYE MOTOR 3 HP TRIFASICO Y TRANSMISIÓN PARA 1000 RPM.",
            "MXN",
            &breakdown,
        ));
        let breakdown = PriceBreakdown::compute(150.0, 100.0, 1);
        order.add(LineItem::new("AX-10", "VENTILADOR AXIAL 10", "USD", &breakdown));
        order
    }

    fn info() -> ExportInfo<'static> {
        ExportInfo {
            project_name: "Nave 4",
            city: "Puebla",
            phone: "222-555-0100",
            price_list: "Precios de Lista",
        }
    }

    #[test]
    fn test_subject_names_project_and_city() {
        assert_eq!(render_subject(&info()), "Pedido: Nave 4 (Puebla)");
    }

    #[test]
    fn test_body_contains_client_and_detail_blocks() {
        let body = render_body(&sample_order(), &info());

        assert!(body.starts_with("SOLICITUD DE COMPRA / COTIZACIÓN"));
        assert!(body.contains("Proyecto: Nave 4"));
        assert!(body.contains("Lista de Precios Usada: Precios de Lista"));
        assert!(body.contains("- (2) MC-18"));
        assert!(body.contains("Precio Venta: $3600.00 MXN"));
    }

    #[test]
    fn test_body_summarizes_each_currency() {
        let body = render_body(&sample_order(), &info());

        assert!(body.contains("Total Venta (MXN): $3600.00"));
        assert!(body.contains("Total Venta (USD): $150.00"));
    }

    #[test]
    fn test_mailto_percent_encodes() {
        let url = mailto_url("ventas@example.com", "Pedido: Nave 4", "linea uno\nlinea dos");

        assert!(url.starts_with("mailto:ventas@example.com?subject="));
        assert!(url.contains("Pedido%3A%20Nave%204"));
        assert!(url.contains("linea%20uno%0Alinea%20dos"));
        assert!(!url.contains(' '));
    }
}
