//! Фраза «Уже N лет с вами!» с русским склонением слова «год»

/// Форма слова «год» для числа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearForm {
    /// 1, 21, 101: «год»
    One,
    /// 2-4, 22-24: «года»
    Few,
    /// 0, 5-20, 25-30, 111-114: «лет»
    Many,
}

impl YearForm {
    pub fn word(&self) -> &'static str {
        match self {
            YearForm::One => "год",
            YearForm::Few => "года",
            YearForm::Many => "лет",
        }
    }
}

/// Выбор формы по модулю числа
pub fn year_form(n: i64) -> YearForm {
    let n = n.unsigned_abs();
    if (11..=14).contains(&(n % 100)) {
        return YearForm::Many;
    }
    match n % 10 {
        1 => YearForm::One,
        2..=4 => YearForm::Few,
        _ => YearForm::Many,
    }
}

/// Возвращает строку с правильным склонением слова «год» для числа n.
pub fn get_year_phrase(n: i64) -> String {
    let form = year_form(n);
    format!("Уже {} {} с вами!", n.unsigned_abs(), form.word())
}

/// Разница в календарных годах
pub fn years_since(event_year: i32, current_year: i32) -> i64 {
    i64::from(current_year) - i64::from(event_year)
}
