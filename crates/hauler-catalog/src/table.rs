//! Built-in reference table: `(canonical name, type id, unit volume m³)`

pub(crate) static BUILTIN_ENTRIES: &[(&str, u32, f64)] = &[
    // Minerals
    ("Tritanium", 34, 0.01),
    ("Pyerite", 35, 0.01),
    ("Mexallon", 36, 0.01),
    ("Isogen", 37, 0.01),
    ("Nocxium", 38, 0.01),
    ("Zydrine", 39, 0.01),
    ("Megacyte", 40, 0.01),
    ("Morphite", 11399, 0.01),
    // Ice products
    ("Heavy Water", 16272, 0.4),
    ("Liquid Ozone", 16273, 0.4),
    ("Helium Isotopes", 16274, 0.03),
    ("Strontium Clathrates", 16275, 3.0),
    ("Oxygen Isotopes", 17887, 0.03),
    ("Nitrogen Isotopes", 17888, 0.03),
    ("Hydrogen Isotopes", 17889, 0.03),
    // Moon materials
    ("Hydrocarbons", 16633, 0.05),
    ("Atmospheric Gases", 16634, 0.05),
    ("Evaporite Deposits", 16635, 0.05),
    ("Silicates", 16636, 0.05),
    ("Tungsten", 16637, 0.05),
    ("Titanium", 16638, 0.05),
    ("Scandium", 16639, 0.05),
    ("Cobalt", 16640, 0.05),
    ("Chromium", 16641, 0.05),
    ("Vanadium", 16642, 0.05),
    ("Cadmium", 16643, 0.05),
    ("Platinum", 16644, 0.05),
    ("Mercury", 16646, 0.05),
    ("Caesium", 16647, 0.05),
    ("Hafnium", 16648, 0.05),
    ("Technetium", 16649, 0.05),
    ("Dysprosium", 16650, 0.05),
    ("Neodymium", 16651, 0.05),
    ("Promethium", 16652, 0.05),
    ("Thulium", 16653, 0.05),
    // Moon ores
    ("Zeolites", 45490, 10.0),
    ("Sylvite", 45491, 10.0),
    ("Bitumens", 45492, 10.0),
    ("Coesite", 45493, 10.0),
    ("Cobaltite", 45494, 10.0),
    ("Euxenite", 45495, 10.0),
    ("Titanite", 45496, 10.0),
    ("Scheelite", 45497, 10.0),
    ("Otavite", 45498, 10.0),
    ("Sperrylite", 45499, 10.0),
    ("Vanadinite", 45500, 10.0),
    ("Chromite", 45501, 10.0),
    ("Carnotite", 45502, 10.0),
    ("Zircon", 45503, 10.0),
    ("Pollucite", 45504, 10.0),
    ("Cinnabar", 45506, 10.0),
    ("Xenotime", 45510, 10.0),
    ("Monazite", 45511, 10.0),
    ("Loparite", 45512, 10.0),
    ("Ytterbite", 45513, 10.0),
    // Modules, drones, ships, containers
    ("Overdrive Injector System II", 1236, 5.0),
    ("Warrior II", 2488, 5.0),
    ("Hobgoblin II", 2456, 5.0),
    ("Co-Processor II", 3888, 5.0),
    ("Small Standard Container", 3296, 100.0),
    ("Eagle", 12011, 10000.0),
];
