use chrono::NaiveDate;

/// Invoice payment status as stored in `invoices.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Exact match on the wire value; no trimming or case folding.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

/// Row to insert. `amount` is in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Fields an update may change. The invoice date is never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Listing row joined with its customer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceListItem {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

impl InvoiceListItem {
    pub fn amount_display(&self) -> String {
        format_cents(self.amount)
    }
}

/// Editable fields of a stored invoice, for pre-filling the edit form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceForEdit {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}

impl InvoiceForEdit {
    /// Amount in dollars as the form expects it, e.g. `12.50`.
    pub fn amount_input(&self) -> String {
        format!("{}.{:02}", self.amount / 100, (self.amount % 100).abs())
    }
}

/// `125000` -> `$1,250.00`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
