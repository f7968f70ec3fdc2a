use super::{NamedSnippet, Section};
use crate::snippet::SnippetSet;

/// Slug, SDK name and install command for each official SDK.
const INSTALL_COMMANDS: [(&str, &str, &str); 6] = [
    ("install-javascript", "JavaScript/Node.js", "npm install @stellantis/connected-vehicles"),
    ("install-python", "Python", "pip install stellantis-connected-vehicles"),
    ("install-java", "Java", "Maven/Gradle dependency"),
    ("install-go", "Go", "go get github.com/stellantis/cv-sdk-go"),
    ("install-dotnet", "C#/.NET", "NuGet package"),
    ("install-php", "PHP", "composer require stellantis/connected-vehicles"),
];

pub(super) fn snippets() -> Vec<NamedSnippet> {
    let installs = INSTALL_COMMANDS.iter().map(|&(slug, sdk, command)| {
        NamedSnippet::new(
            slug,
            Section::Sdks,
            SnippetSet::single(command, "bash").with_title(sdk),
        )
    });
    installs
        .chain([
            NamedSnippet::new("sdk-javascript", Section::Sdks, sdk_javascript()),
            NamedSnippet::new("sdk-python", Section::Sdks, sdk_python()),
            NamedSnippet::new("sdk-java", Section::Sdks, sdk_java()),
        ])
        .collect()
}

fn sdk_javascript() -> SnippetSet {
    SnippetSet::single(
        r#"import { StellantisCV } from '@stellantis/connected-vehicles';

// Initialize the client
const client = new StellantisCV({
  clientId: process.env.STELLANTIS_CLIENT_ID,
  clientSecret: process.env.STELLANTIS_CLIENT_SECRET,
  environment: 'production'
});

// Get vehicles
const vehicles = await client.vehicles.list();

// Get vehicle location
const location = await client.vehicles.getLocation('vehicle_id');

// Lock vehicle doors
await client.vehicles.lock('vehicle_id');"#,
        "javascript",
    )
    .with_title("JavaScript/Node.js")
}

fn sdk_python() -> SnippetSet {
    SnippetSet::single(
        r#"from stellantis_cv import StellantisCV

# Initialize the client
client = StellantisCV(
    client_id=os.getenv('STELLANTIS_CLIENT_ID'),
    client_secret=os.getenv('STELLANTIS_CLIENT_SECRET'),
    environment='production'
)

# Get vehicles
vehicles = await client.vehicles.list()

# Get vehicle location
location = await client.vehicles.get_location('vehicle_id')

# Lock vehicle doors
await client.vehicles.lock('vehicle_id')"#,
        "python",
    )
    .with_title("Python")
}

fn sdk_java() -> SnippetSet {
    SnippetSet::single(
        r#"import com.stellantis.cv.StellantisCV;
import com.stellantis.cv.models.Vehicle;

// Initialize the client
StellantisCV client = StellantisCV.builder()
    .clientId(System.getenv("STELLANTIS_CLIENT_ID"))
    .clientSecret(System.getenv("STELLANTIS_CLIENT_SECRET"))
    .environment(Environment.PRODUCTION)
    .build();

// Get vehicles
List<Vehicle> vehicles = client.vehicles().list().get();

// Get vehicle location
Location location = client.vehicles()
    .getLocation("vehicle_id")
    .get();

// Lock vehicle doors  
client.vehicles().lock("vehicle_id").get();"#,
        "java",
    )
    .with_title("Java")
}
