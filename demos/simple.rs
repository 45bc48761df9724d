use exact_cover::coverings;

#[derive(Clone)]
struct Named(&'static str, Vec<i32>);

impl IntoIterator for Named {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.1.into_iter()
    }
}

fn main() {
    // Knuth's canonical 6x6 instance.
    let subsets = vec![
        Named("A", vec![1, 4, 7]),
        Named("B", vec![1, 4]),
        Named("C", vec![4, 5, 7]),
        Named("D", vec![3, 5, 6]),
        Named("E", vec![2, 3, 6, 7]),
        Named("F", vec![2, 7]),
    ];
    for solution in coverings(subsets) {
        let names: Vec<&str> = solution.iter().map(|rc| rc.0).collect();
        println!("first problem: {:?}", names);
    }

    // Four singletons over {1,2,3,4}, plus two overlapping pairs.
    let subsets = vec![
        Named("1", vec![1]),
        Named("2", vec![2]),
        Named("3", vec![3]),
        Named("4", vec![4]),
        Named("13", vec![1, 3]),
        Named("24", vec![2, 4]),
    ];
    for solution in coverings(subsets) {
        let names: Vec<&str> = solution.iter().map(|rc| rc.0).collect();
        println!("second problem: {:?}", names);
    }
}
