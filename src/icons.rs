pub(crate) const LOGO: &[u8] = include_bytes!("../assets/svg/logo.svg");
pub(crate) const NAV_HOME: &[u8] = include_bytes!("../assets/svg/home.svg");
pub(crate) const NAV_ABOUT: &[u8] = include_bytes!("../assets/svg/user.svg");
pub(crate) const NAV_CONTACT: &[u8] = include_bytes!("../assets/svg/mail.svg");
pub(crate) const GITHUB: &[u8] = include_bytes!("../assets/svg/github.svg");
pub(crate) const COPY: &[u8] = include_bytes!("../assets/svg/copy.svg");
pub(crate) const SEND: &[u8] = include_bytes!("../assets/svg/send.svg");
