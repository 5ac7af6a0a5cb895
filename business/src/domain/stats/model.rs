/// Admin dashboard counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Accounts with the `user` role; admins are not counted.
    pub total_users: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub products_count: u64,
}
