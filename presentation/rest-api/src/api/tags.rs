use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Auth,
    Users,
    Products,
    Cart,
    Orders,
    Designs,
    Stats,
}
