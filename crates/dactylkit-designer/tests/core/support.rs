use dactylkit_designer::{Key, KeyGrid};

/// A `rows` x `columns` grid on a flat 19mm pitch. Cells listed in `holes` are left empty.
pub fn flat_grid(rows: usize, columns: usize, holes: &[(usize, usize)]) -> KeyGrid {
    let cells = (0..rows)
        .map(|r| {
            (0..columns)
                .map(|c| {
                    if holes.contains(&(r, c)) {
                        return None;
                    }
                    let mut key = Key::at(format!("k_{r}_{c}"), c as f64 * 19.0, -(r as f64) * 19.0, 0.0);
                    key.disable_switch_z_offset = true;
                    Some(key)
                })
                .collect()
        })
        .collect();
    KeyGrid::new(cells).expect("rectangular grid")
}
