use csv::Writer;
use nalgebra::DVector;
use std::fs::File;
use std::io::{self, Write as IoWrite};

pub fn save_series_to_file(
    series: &Vec<&DVector<f64>>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &DVector<f64>,
    arg: &String,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    // Write headers
    writeln!(file, "{}", headers_with_x.join("\t"))?;
    for i in 0..x_mesh.len() {
        let mut row_data = Vec::new();
        row_data.push(x_mesh[i].to_string());
        row_data.extend(series.iter().map(|col| col[i].to_string()));
        writeln!(file, "{}", row_data.join("\t"))?;
    }

    Ok(())
}

pub fn save_series_to_csv(
    series: &Vec<&DVector<f64>>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &DVector<f64>,
    arg: &String,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    // Prepare and write headers
    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    writer.write_record(&headers_with_x)?;

    // Write data rows
    for i in 0..x_mesh.len() {
        let mut row_data = Vec::new();
        row_data.push(x_mesh[i].to_string());
        row_data.extend(series.iter().map(|col| col[i].to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use std::fs;

    #[test]
    fn test_save_series_to_csv() {
        let x = DVector::from_vec(vec![0.0, 1.0, 2.0]);
        let y = DVector::from_vec(vec![0.0, 1.0, 4.0]);
        let y1 = DVector::from_vec(vec![0.0, 2.0, 4.0]);
        let filename = "test_series.csv";
        save_series_to_csv(
            &vec![&y, &y1],
            &vec!["f".to_string(), "f'".to_string()],
            filename,
            &x,
            &"x".to_string(),
        )
        .unwrap();
        let content = fs::read_to_string(filename).unwrap();
        assert!(content.starts_with("x,f,f'"));
        assert!(content.contains("2,4,4"));
        fs::remove_file(filename).unwrap();
    }

    #[test]
    fn test_save_series_to_file() {
        let x = DVector::from_vec(vec![0.0, 0.5]);
        let y = DVector::from_vec(vec![1.0, 2.0]);
        let filename = "test_series.txt";
        save_series_to_file(
            &vec![&y],
            &vec!["f".to_string()],
            filename,
            &x,
            &"x".to_string(),
        )
        .unwrap();
        let content = fs::read_to_string(filename).unwrap();
        assert!(content.starts_with("x\tf"));
        assert!(content.contains("0.5\t2"));
        fs::remove_file(filename).unwrap();
    }
}
