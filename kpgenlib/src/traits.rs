//! Трэйты ввода: позиции читаются из std::io::BufRead, шаблон — из источника.

use crate::{error::Result, model::LineItem};
use std::io::BufRead;

/// Формат файла со списком выбранных услуг.
pub trait ReadItems {
    fn read<R: BufRead>(r: R) -> Result<Vec<LineItem>>;
}

/// Откуда берётся HTML-шаблон предложения.
pub trait TemplateSource {
    /// Человекочитаемое имя источника для сообщений об ошибках.
    fn describe(&self) -> String;

    fn load(&self) -> Result<String>;
}
