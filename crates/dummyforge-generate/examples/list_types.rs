use dummyforge_core::DataType;

fn main() {
    for data_type in DataType::ALL {
        println!("{data_type}");
    }
}
