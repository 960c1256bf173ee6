use crate::routes::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
