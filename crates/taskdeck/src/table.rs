use taskdeck_core::views::TenantRow;
use taskdeck_core::views::tenants::COLUMNS;

const LOGIN_HEADER: &str = "Login";

pub struct TableFormatter {
    name_width: usize,
    subdomain_width: usize,
    plan_width: usize,
    status_width: usize,
    registered_width: usize,
    login_width: usize,
}

impl TableFormatter {
    pub fn new(rows: &[TenantRow]) -> Self {
        let name_width = rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(COLUMNS[0].len(), 40);
        let subdomain_width = rows
            .iter()
            .map(|r| r.subdomain.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(COLUMNS[1].len(), 30);
        // Last column; never truncated so the link stays usable.
        let login_width = rows
            .iter()
            .map(|r| r.login_url.chars().count())
            .max()
            .unwrap_or(0)
            .max(LOGIN_HEADER.len());

        Self {
            name_width,
            subdomain_width,
            plan_width: 12,
            status_width: COLUMNS[3].len(),
            registered_width: COLUMNS[4].len(),
            login_width,
        }
    }

    pub fn format_table(&self, rows: &[TenantRow]) -> String {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        lines.extend(rows.iter().map(|row| self.row(row)));
        lines.push(self.bottom_border());
        lines.join("\n")
    }

    fn row(&self, row: &TenantRow) -> String {
        self.line(&[
            truncate(&row.name, self.name_width),
            truncate(&row.subdomain, self.subdomain_width),
            truncate(&row.plan, self.plan_width),
            truncate(&row.status, self.status_width),
            truncate(&row.registered, self.registered_width),
            pad(&row.login_url, self.login_width),
        ])
    }

    fn header_row(&self) -> String {
        self.line(&[
            truncate(COLUMNS[0], self.name_width),
            truncate(COLUMNS[1], self.subdomain_width),
            truncate(COLUMNS[2], self.plan_width),
            truncate(COLUMNS[3], self.status_width),
            truncate(COLUMNS[4], self.registered_width),
            pad(LOGIN_HEADER, self.login_width),
        ])
    }

    fn widths(&self) -> [usize; 6] {
        [
            self.name_width,
            self.subdomain_width,
            self.plan_width,
            self.status_width,
            self.registered_width,
            self.login_width,
        ]
    }

    fn line(&self, cells: &[String]) -> String {
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = self
            .widths()
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(mid), right)
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
