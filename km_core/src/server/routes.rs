pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiAsk {
    Ask,
}

impl BackendApiAsk {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiAsk::Ask => ApiPath::Static("/ask"),
        }
    }
}

pub fn print_all_backend_api_paths() {
    for ask in [BackendApiAsk::Ask].iter() {
        println!("/api{}", ask.path().as_str());
    }
}
