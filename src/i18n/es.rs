pub const BTN_PREV: &str = "Anterior";
pub const BTN_NEXT: &str = "Siguiente";
pub const TEXT_LOADINGIMG: &str = "Cargando imagen...";
pub const TEXT_IMAGE_ERROR: &str = "No se pudo mostrar esta obra";
pub const TEXT_KEYS_HINT: &str = "Usa las flechas o Espacio para navegar";
