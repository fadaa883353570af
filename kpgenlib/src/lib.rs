//! kpgenlib — библиотека для генерации коммерческих предложений
//! (таблица услуг, итог прописью, подстановка в HTML-шаблон)

pub mod builder;
pub mod dates;
pub mod error;
pub mod filename;
pub mod model;
pub mod money;
pub mod render;
pub mod source;
pub mod template;
pub mod traits;
pub mod words;

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use builder::{ProposalDocumentBuilder, ProposalOptions};
pub use model::{CompanyInfo, LineItem, ProposalDocument, RawLineItem};
