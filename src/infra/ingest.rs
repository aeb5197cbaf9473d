//! Приём "сырого" ввода списка.
//!
//! Парсинг файлов (CSV и т.п.) делает фронт; сюда приходят уже
//! строки текста или строки таблицы. На выходе: кандидаты для
//! `RosterStore::append`. Мусор отфильтровывается, не отклоняется.

/// Многострочный текст: одно имя на строку, пустые строки пропускаем.
pub fn names_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Табличные данные: каждая непустая ячейка любой строки/колонки считается именем.
///
/// Порядок: строка за строкой, слева направо.
pub fn names_from_rows<R, C>(rows: R) -> Vec<String>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    rows.into_iter()
        .flat_map(|row| row.into_iter())
        .filter_map(|cell| {
            let trimmed = cell.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
